use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::CheckinError;
use crate::events::CheckinCompleted;
use crate::helpers::apply_check_in;
use crate::state::{CheckinReceipt, GlobalConfig, GlobalStats, UserRecord};

#[derive(Accounts)]
pub struct CheckIn<'info> {
    #[account(
        seeds = [GlobalConfig::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, GlobalConfig>,

    #[account(
        mut,
        seeds = [GlobalStats::SEED],
        bump = stats.bump,
    )]
    pub stats: Account<'info, GlobalStats>,

    /// Created on the user's first check-in; rent paid by the user.
    /// A failed handler rolls the creation back with the transaction.
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + UserRecord::INIT_SPACE,
        seeds = [UserRecord::SEED, user.key().as_ref()],
        bump,
    )]
    pub user_record: Account<'info, UserRecord>,

    #[account(mut)]
    pub user: Signer<'info>,

    /// User's fee-mint token account the fee is drawn from.
    #[account(
        mut,
        constraint = user_token_account.owner == user.key(),
        constraint = user_token_account.mint == config.fee_mint,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Fee recipient's fee-mint token account.
    #[account(
        mut,
        constraint = fee_token_account.owner == config.fee_recipient,
        constraint = fee_token_account.mint == config.fee_mint,
    )]
    pub fee_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CheckIn>) -> Result<CheckinReceipt> {
    let now = Clock::get()?.slot;

    let record = &mut ctx.accounts.user_record;
    if record.authority == Pubkey::default() {
        record.authority = ctx.accounts.user.key();
        record.bump = ctx.bumps.user_record;
    }

    // Reject before touching the fee so an ineligible call costs nothing.
    require!(
        record.can_check_in(now, ctx.accounts.config.window_length),
        CheckinError::AlreadyCheckedIn
    );

    // Surface an insufficient balance as the ledger's own error instead of
    // a raw token-program failure.
    let fee_amount = ctx.accounts.config.fee_amount;
    require!(
        ctx.accounts.user_token_account.amount >= fee_amount,
        CheckinError::FeeTransferFailed
    );

    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.user_token_account.to_account_info(),
            to: ctx.accounts.fee_token_account.to_account_info(),
            authority: ctx.accounts.user.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, fee_amount)?;

    let receipt = apply_check_in(
        &mut ctx.accounts.user_record,
        &mut ctx.accounts.stats,
        &ctx.accounts.config,
        now,
    )?;

    emit!(CheckinCompleted {
        user: ctx.accounts.user.key(),
        slot: now,
        earned: receipt.earned,
        total_points: receipt.total_points,
        streak: receipt.streak,
        total_checkins: receipt.total_checkins,
        fee_paid: receipt.fee_paid,
    });

    Ok(receipt)
}
