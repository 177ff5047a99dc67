use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

use instructions::*;
use state::{CheckinReceipt, GlobalStatsView, UserStatsView};

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod checkin {
    use super::*;

    /// One-time ledger initialization; the deployer becomes admin.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Check in for the signing user, paying the configured fee.
    pub fn check_in(ctx: Context<CheckIn>) -> Result<CheckinReceipt> {
        instructions::check_in::handler(ctx)
    }

    /// Check in up to 10 users at once; the payer covers one aggregate fee
    /// transfer up front. Remaining accounts carry the user record PDAs,
    /// one per listed user, in order.
    pub fn bulk_check_in<'info>(
        ctx: Context<'_, '_, 'info, 'info, BulkCheckIn<'info>>,
        users: Vec<Pubkey>,
    ) -> Result<Vec<CheckinReceipt>> {
        instructions::bulk_check_in::handler(ctx, users)
    }

    /// Read a user's standing, including whether they can check in now.
    pub fn get_user_stats(ctx: Context<GetUserStats>, user: Pubkey) -> Result<UserStatsView> {
        instructions::get_stats::get_user_stats(ctx, user)
    }

    /// Read the ledger configuration and global counters in one view.
    pub fn get_global_stats(ctx: Context<GetGlobalStats>) -> Result<GlobalStatsView> {
        instructions::get_stats::get_global_stats(ctx)
    }

    /// Admin: set the base points granted per check-in (must be positive).
    pub fn set_points_per_checkin(ctx: Context<UpdateConfig>, value: u64) -> Result<()> {
        instructions::set_config::set_points_per_checkin(ctx, value)
    }

    /// Admin: set the per-day streak bonus (zero allowed).
    pub fn set_streak_bonus(ctx: Context<UpdateConfig>, value: u64) -> Result<()> {
        instructions::set_config::set_streak_bonus(ctx, value)
    }

    /// Admin: set the check-in fee (must be positive).
    pub fn set_fee_amount(ctx: Context<UpdateConfig>, value: u64) -> Result<()> {
        instructions::set_config::set_fee_amount(ctx, value)
    }
}
