use anchor_lang::prelude::*;
use anchor_spl::{
    token_2022,
    token_interface::{Mint as InterfaceMint, TokenAccount as InterfaceTokenAccount, TokenInterface},
};
use crate::errors::CanvasError;
use crate::state::{CanvasConfig, FEE_VAULT_SEED};

#[derive(Accounts)]
pub struct WithdrawFees<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CanvasConfig::SEED],
        bump = canvas_config.bump,
        has_one = authority @ CanvasError::Unauthorized,
        has_one = fee_vault @ CanvasError::InvalidFeeVault,
    )]
    pub canvas_config: Account<'info, CanvasConfig>,

    #[account(
        constraint = fee_mint.key() == canvas_config.fee_mint @ CanvasError::WithdrawFailed
    )]
    pub fee_mint: InterfaceAccount<'info, InterfaceMint>,

    #[account(
        mut,
        seeds = [FEE_VAULT_SEED, canvas_config.key().as_ref()],
        bump,
    )]
    pub fee_vault: InterfaceAccount<'info, InterfaceTokenAccount>,

    /// Any token account of the fee mint other than the vault itself
    #[account(
        mut,
        token::mint = fee_mint,
        constraint = destination.key() != fee_vault.key() @ CanvasError::WithdrawFailed,
    )]
    pub destination: InterfaceAccount<'info, InterfaceTokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Pays `amount` out through `release` and books it. Only the configured authority may withdraw,
/// never into the vault itself, and never more than has been collected and not yet withdrawn.
pub(crate) fn apply_withdrawal<F>(
    config: &mut CanvasConfig,
    caller: Pubkey,
    destination: Pubkey,
    amount: u64,
    release: F,
) -> Result<()>
where
    F: FnOnce(u64) -> Result<()>,
{
    require_keys_eq!(caller, config.authority, CanvasError::Unauthorized);
    require_keys_neq!(destination, config.fee_vault, CanvasError::WithdrawFailed);
    config.ensure_withdrawable(amount)?;
    release(amount)?;
    config.record_withdrawal(amount)
}

pub fn handler(ctx: Context<WithdrawFees>, amount: u64) -> Result<()> {
    let caller = ctx.accounts.authority.key();
    let destination = ctx.accounts.destination.key();
    let vault_balance = ctx.accounts.fee_vault.amount;
    let decimals = ctx.accounts.fee_mint.decimals;
    let bump = ctx.accounts.canvas_config.bump;

    let token_program = ctx.accounts.token_program.to_account_info();
    let cpi_accounts = token_2022::TransferChecked {
        from: ctx.accounts.fee_vault.to_account_info(),
        to: ctx.accounts.destination.to_account_info(),
        authority: ctx.accounts.canvas_config.to_account_info(),
        mint: ctx.accounts.fee_mint.to_account_info(),
    };
    let release = move |amount: u64| -> Result<()> {
        if vault_balance < amount {
            return Err(error!(CanvasError::WithdrawFailed).with_values((vault_balance, amount)));
        }
        let seeds: &[&[u8]] = &[CanvasConfig::SEED, &[bump]];
        let signer_seeds: &[&[&[u8]]] = &[seeds];
        token_2022::transfer_checked(
            CpiContext::new_with_signer(token_program, cpi_accounts, signer_seeds),
            amount,
            decimals,
        )
    };

    let config = &mut ctx.accounts.canvas_config;
    apply_withdrawal(config, caller, destination, amount, release)?;

    msg!(
        "Withdrew {} fee tokens to {}, {} still withdrawable",
        amount,
        destination,
        config.withdrawable()
    );
    Ok(())
}
