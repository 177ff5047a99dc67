use anchor_lang::prelude::*;

use crate::errors::CheckinError;
use crate::state::{CheckinReceipt, GlobalConfig, GlobalStats, UserRecord};

/// Streak value for a check-in landing at `now`.
///
/// Continuation requires the gap since the last check-in to be under two
/// full windows: the previous window has closed, but no more than one
/// additional window has elapsed. A gap of exactly two windows resets.
pub fn next_streak(record: &UserRecord, now: u64, window_length: u64) -> u64 {
    if record.is_new_user() {
        return 1;
    }
    let gap = now.saturating_sub(record.last_checkin_slot);
    if gap < window_length.saturating_mul(2) {
        record.current_streak.saturating_add(1)
    } else {
        1
    }
}

/// Points for a check-in landing on `streak`: the flat base plus the bonus
/// for every consecutive day beyond the first. The bonus is uncapped.
pub fn points_earned(config: &GlobalConfig, streak: u64) -> Result<u64> {
    let bonus_days = streak.saturating_sub(1);
    let bonus = bonus_days
        .checked_mul(config.streak_bonus_per_day)
        .ok_or(CheckinError::MathOverflow)?;
    let earned = config
        .points_per_checkin
        .checked_add(bonus)
        .ok_or(CheckinError::MathOverflow)?;
    Ok(earned)
}

/// Applies one check-in at slot `now` to a record/stats pair.
///
/// The caller collects the fee before committing the transition;
/// `total_fee_paid` accrues `config.fee_amount` whether the fee was paid
/// per user or as a share of an aggregate batch transfer.
pub fn apply_check_in(
    record: &mut UserRecord,
    stats: &mut GlobalStats,
    config: &GlobalConfig,
    now: u64,
) -> Result<CheckinReceipt> {
    require!(
        record.can_check_in(now, config.window_length),
        CheckinError::AlreadyCheckedIn
    );
    let is_new_user = record.is_new_user();

    let streak = next_streak(record, now, config.window_length);
    let earned = points_earned(config, streak)?;

    record.last_checkin_slot = now;
    record.total_points = record
        .total_points
        .checked_add(earned)
        .ok_or(CheckinError::MathOverflow)?;
    record.current_streak = streak;
    record.total_checkins = record
        .total_checkins
        .checked_add(1)
        .ok_or(CheckinError::MathOverflow)?;
    record.total_fee_paid = record
        .total_fee_paid
        .checked_add(config.fee_amount)
        .ok_or(CheckinError::MathOverflow)?;

    stats.total_checkins = stats
        .total_checkins
        .checked_add(1)
        .ok_or(CheckinError::MathOverflow)?;
    if is_new_user {
        stats.unique_users = stats
            .unique_users
            .checked_add(1)
            .ok_or(CheckinError::MathOverflow)?;
    }

    Ok(CheckinReceipt {
        earned,
        total_points: record.total_points,
        streak,
        total_checkins: record.total_checkins,
        fee_paid: config.fee_amount,
    })
}
