use anchor_lang::prelude::*;

use crate::errors::CanvasError;

/// Per-actor record of the most recent free placement. Paid placements never touch it.
#[account]
#[derive(InitSpace)]
pub struct CooldownRecord {
    pub actor: Pubkey,
    /// `None` until the actor's first free placement
    pub last_free_write_at: Option<i64>,
    pub bump: u8,
}

impl CooldownRecord {
    pub const SEED: &'static [u8] = b"cooldown";

    /// Earliest time the next free placement is allowed, `None` if it is allowed right away.
    pub fn ready_at(&self, cooldown_seconds: i64) -> Result<Option<i64>> {
        let Some(last) = self.last_free_write_at else {
            return Ok(None);
        };
        let ready_at = last.checked_add(cooldown_seconds).ok_or(CanvasError::Overflow)?;
        Ok(Some(ready_at))
    }

    pub fn ensure_ready(&self, now: i64, cooldown_seconds: i64) -> Result<()> {
        let Some(ready_at) = self.ready_at(cooldown_seconds)? else {
            return Ok(());
        };
        if now < ready_at {
            let last = self.last_free_write_at.unwrap_or_default();
            return Err(error!(CanvasError::CooldownActive).with_values((last, cooldown_seconds)));
        }
        Ok(())
    }

    pub fn record_free_write(&mut self, now: i64) {
        self.last_free_write_at = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::{ComparedValues, Error};

    fn values(err: Error) -> Option<ComparedValues> {
        match err {
            Error::AnchorError(err) => err.compared_values,
            Error::ProgramError(_) => None,
        }
    }

    fn fresh() -> CooldownRecord {
        CooldownRecord {
            actor: Pubkey::new_unique(),
            last_free_write_at: None,
            bump: 255,
        }
    }

    #[test]
    fn test_first_free_write_always_allowed() {
        let record = fresh();
        assert!(record.ensure_ready(0, 600).is_ok());
        assert!(record.ensure_ready(i64::MIN, i64::MAX).is_ok());
        assert_eq!(record.ready_at(600).unwrap(), None);
    }

    #[test]
    fn test_write_at_time_zero_still_starts_cooldown() {
        let mut record = fresh();
        record.record_free_write(0);
        assert_eq!(
            record.ensure_ready(300, 600).unwrap_err(),
            Error::from(CanvasError::CooldownActive)
        );
        assert!(record.ensure_ready(600, 600).is_ok());
    }

    #[test]
    fn test_active_cooldown_reports_last_write_and_duration() {
        let mut record = fresh();
        record.record_free_write(0);
        assert_eq!(
            values(record.ensure_ready(300, 600).unwrap_err()),
            Some(ComparedValues::Values(["0".into(), "600".into()]))
        );

        record.record_free_write(1_700_000_000);
        assert_eq!(
            values(record.ensure_ready(1_700_000_001, 45).unwrap_err()),
            Some(ComparedValues::Values(["1700000000".into(), "45".into()]))
        );
    }

    #[test]
    fn test_cooldown_boundaries() {
        let mut record = fresh();
        record.record_free_write(1_700_000_000);
        assert!(record.ensure_ready(1_700_000_599, 600).is_err());
        assert!(record.ensure_ready(1_700_000_600, 600).is_ok());
        assert!(record.ensure_ready(1_700_001_000, 600).is_ok());
        assert_eq!(record.ready_at(600).unwrap(), Some(1_700_000_600));
    }

    #[test]
    fn test_zero_cooldown_allows_immediate_rewrite() {
        let mut record = fresh();
        record.record_free_write(42);
        assert!(record.ensure_ready(42, 0).is_ok());
    }

    #[test]
    fn test_ready_at_overflow() {
        let mut record = fresh();
        record.record_free_write(i64::MAX);
        assert_eq!(
            record.ensure_ready(i64::MAX, 1).unwrap_err(),
            Error::from(CanvasError::Overflow)
        );
    }
}
