use anchor_lang::prelude::*;

use crate::errors::CanvasError;

pub const FEE_VAULT_SEED: &[u8] = b"fee_vault";

/// Fee charged for a cooldown-bypassing placement, in base units of the fee mint.
pub const PAID_PIXEL_FEE: u64 = 1_000_000;

#[account]
#[derive(InitSpace)]
pub struct CanvasConfig {
    /// Administrator: the only identity allowed to withdraw fees or change the cooldown
    pub authority: Pubkey,
    pub fee_mint: Pubkey,
    /// Token account holding collected fees, owned by this config PDA
    pub fee_vault: Pubkey,
    /// Minimum seconds between two free placements by the same actor
    pub cooldown_seconds: i64,
    pub total_collected: u64,
    pub total_withdrawn: u64,
    pub free_placements: u64,
    pub paid_placements: u64,
    pub bump: u8,
    pub _padding: [u8; 64],
}

impl CanvasConfig {
    pub const SEED: &'static [u8] = b"canvas_config";

    /// Fees collected and not yet paid out.
    pub fn withdrawable(&self) -> u64 {
        self.total_collected.saturating_sub(self.total_withdrawn)
    }

    pub fn set_cooldown(&mut self, cooldown_seconds: i64) -> Result<()> {
        require!(cooldown_seconds >= 0, CanvasError::InvalidCooldown);
        self.cooldown_seconds = cooldown_seconds;
        Ok(())
    }

    pub fn record_fee_collected(&mut self, amount: u64) -> Result<()> {
        self.total_collected = self
            .total_collected
            .checked_add(amount)
            .ok_or(CanvasError::Overflow)?;
        Ok(())
    }

    pub fn ensure_withdrawable(&self, amount: u64) -> Result<()> {
        let available = self.withdrawable();
        if amount == 0 || amount > available {
            return Err(error!(CanvasError::WithdrawFailed).with_values((amount, available)));
        }
        Ok(())
    }

    /// Books a payout. Fails without touching the totals if `amount` exceeds what is withdrawable.
    pub fn record_withdrawal(&mut self, amount: u64) -> Result<()> {
        self.ensure_withdrawable(amount)?;
        self.total_withdrawn = self
            .total_withdrawn
            .checked_add(amount)
            .ok_or(CanvasError::Overflow)?;
        Ok(())
    }

    pub fn count_placement(&mut self, paid: bool) -> Result<()> {
        let counter = if paid {
            &mut self.paid_placements
        } else {
            &mut self.free_placements
        };
        *counter = counter.checked_add(1).ok_or(CanvasError::Overflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn config() -> CanvasConfig {
        CanvasConfig {
            authority: Pubkey::new_unique(),
            fee_mint: Pubkey::new_unique(),
            fee_vault: Pubkey::new_unique(),
            cooldown_seconds: 600,
            total_collected: 0,
            total_withdrawn: 0,
            free_placements: 0,
            paid_placements: 0,
            bump: 255,
            _padding: [0u8; 64],
        }
    }

    #[test]
    fn test_collection_increases_withdrawable_by_fee() {
        let mut config = config();
        config.record_fee_collected(PAID_PIXEL_FEE).unwrap();
        assert_eq!(config.withdrawable(), PAID_PIXEL_FEE);
        config.record_fee_collected(PAID_PIXEL_FEE).unwrap();
        assert_eq!(config.withdrawable(), 2 * PAID_PIXEL_FEE);
    }

    #[test]
    fn test_withdrawal_never_exceeds_collections() {
        let mut config = config();
        config.record_fee_collected(PAID_PIXEL_FEE).unwrap();

        let err = config.record_withdrawal(PAID_PIXEL_FEE + 1).unwrap_err();
        assert_eq!(err, Error::from(CanvasError::WithdrawFailed));
        assert_eq!(config.total_withdrawn, 0);

        config.record_withdrawal(PAID_PIXEL_FEE / 2).unwrap();
        config.record_withdrawal(PAID_PIXEL_FEE / 2).unwrap();
        assert_eq!(config.withdrawable(), 0);
        assert!(config.record_withdrawal(1).is_err());
        assert!(config.total_withdrawn <= config.total_collected);
    }

    #[test]
    fn test_zero_withdrawal_rejected() {
        let mut config = config();
        config.record_fee_collected(10).unwrap();
        assert_eq!(
            config.record_withdrawal(0).unwrap_err(),
            Error::from(CanvasError::WithdrawFailed)
        );
    }

    #[test]
    fn test_collection_overflow() {
        let mut config = config();
        config.total_collected = u64::MAX;
        assert_eq!(
            config.record_fee_collected(1).unwrap_err(),
            Error::from(CanvasError::Overflow)
        );
        assert_eq!(config.total_collected, u64::MAX);
    }

    #[test]
    fn test_set_cooldown() {
        let mut config = config();
        config.set_cooldown(0).unwrap();
        assert_eq!(config.cooldown_seconds, 0);
        assert_eq!(
            config.set_cooldown(-1).unwrap_err(),
            Error::from(CanvasError::InvalidCooldown)
        );
        assert_eq!(config.cooldown_seconds, 0);
    }

    #[test]
    fn test_count_placement() {
        let mut config = config();
        config.count_placement(false).unwrap();
        config.count_placement(true).unwrap();
        config.count_placement(true).unwrap();
        assert_eq!(config.free_placements, 1);
        assert_eq!(config.paid_placements, 2);
    }
}
