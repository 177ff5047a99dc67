use anchor_lang::prelude::*;

/// Returned from `check_in` and `bulk_check_in` via instruction return data.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckinReceipt {
    pub earned: u64,
    pub total_points: u64,
    pub streak: u64,
    pub total_checkins: u64,
    pub fee_paid: u64,
}

/// Read view of one user's standing. All-zero with `can_check_in = true`
/// for users who have never checked in.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserStatsView {
    pub points: u64,
    pub streak: u64,
    pub total_checkins: u64,
    pub last_checkin: u64,
    pub fee_paid: u64,
    pub can_check_in: bool,
}

/// Ledger configuration and global counters composed into one view.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlobalStatsView {
    pub points_per_checkin: u64,
    pub streak_bonus_per_day: u64,
    pub fee_amount: u64,
    pub window_length: u64,
    pub fee_recipient: Pubkey,
    pub total_checkins: u64,
    pub unique_users: u64,
}
