use anchor_lang::prelude::*;

use crate::state::{GlobalConfig, GlobalStats, GlobalStatsView, UserRecord, UserStatsView};

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct GetUserStats<'info> {
    #[account(
        seeds = [GlobalConfig::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, GlobalConfig>,

    /// The user's record; absent for users who never checked in.
    #[account(
        seeds = [UserRecord::SEED, user.as_ref()],
        bump = user_record.bump,
    )]
    pub user_record: Option<Account<'info, UserRecord>>,
}

#[derive(Accounts)]
pub struct GetGlobalStats<'info> {
    #[account(
        seeds = [GlobalConfig::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, GlobalConfig>,

    #[account(
        seeds = [GlobalStats::SEED],
        bump = stats.bump,
    )]
    pub stats: Account<'info, GlobalStats>,
}

pub fn get_user_stats(ctx: Context<GetUserStats>, _user: Pubkey) -> Result<UserStatsView> {
    let config = &ctx.accounts.config;
    let now = Clock::get()?.slot;

    let view = match ctx.accounts.user_record.as_ref() {
        Some(record) => UserStatsView {
            points: record.total_points,
            streak: record.current_streak,
            total_checkins: record.total_checkins,
            last_checkin: record.last_checkin_slot,
            fee_paid: record.total_fee_paid,
            can_check_in: record.can_check_in(now, config.window_length),
        },
        None => UserStatsView {
            points: 0,
            streak: 0,
            total_checkins: 0,
            last_checkin: 0,
            fee_paid: 0,
            can_check_in: true,
        },
    };
    Ok(view)
}

pub fn get_global_stats(ctx: Context<GetGlobalStats>) -> Result<GlobalStatsView> {
    let config = &ctx.accounts.config;
    let stats = &ctx.accounts.stats;

    Ok(GlobalStatsView {
        points_per_checkin: config.points_per_checkin,
        streak_bonus_per_day: config.streak_bonus_per_day,
        fee_amount: config.fee_amount,
        window_length: config.window_length,
        fee_recipient: config.fee_recipient,
        total_checkins: stats.total_checkins,
        unique_users: stats.unique_users,
    })
}
