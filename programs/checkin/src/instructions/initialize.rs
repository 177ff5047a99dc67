use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::{
    DEFAULT_FEE_AMOUNT, DEFAULT_POINTS_PER_CHECKIN, DEFAULT_STREAK_BONUS_PER_DAY,
    DEFAULT_WINDOW_LENGTH,
};
use crate::events::LedgerInitialized;
use crate::state::{GlobalConfig, GlobalStats};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + GlobalConfig::INIT_SPACE,
        seeds = [GlobalConfig::SEED],
        bump,
    )]
    pub config: Account<'info, GlobalConfig>,

    #[account(
        init,
        payer = authority,
        space = 8 + GlobalStats::INIT_SPACE,
        seeds = [GlobalStats::SEED],
        bump,
    )]
    pub stats: Account<'info, GlobalStats>,

    /// Deployer; becomes the ledger admin.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: Wallet that will receive check-in fees.
    pub fee_recipient: UncheckedAccount<'info>,

    /// Mint the check-in fee is denominated in.
    pub fee_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.admin = ctx.accounts.authority.key();
    config.fee_recipient = ctx.accounts.fee_recipient.key();
    config.fee_mint = ctx.accounts.fee_mint.key();
    config.points_per_checkin = DEFAULT_POINTS_PER_CHECKIN;
    config.streak_bonus_per_day = DEFAULT_STREAK_BONUS_PER_DAY;
    config.fee_amount = DEFAULT_FEE_AMOUNT;
    config.window_length = DEFAULT_WINDOW_LENGTH;
    config.bump = ctx.bumps.config;

    let stats = &mut ctx.accounts.stats;
    stats.total_checkins = 0;
    stats.unique_users = 0;
    stats.bump = ctx.bumps.stats;

    emit!(LedgerInitialized {
        admin: config.admin,
        fee_recipient: config.fee_recipient,
        fee_mint: config.fee_mint,
    });

    Ok(())
}
