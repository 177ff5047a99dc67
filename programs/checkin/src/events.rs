use anchor_lang::prelude::*;

#[event]
pub struct LedgerInitialized {
    pub admin: Pubkey,
    pub fee_recipient: Pubkey,
    pub fee_mint: Pubkey,
}

#[event]
pub struct CheckinCompleted {
    pub user: Pubkey,
    pub slot: u64,
    pub earned: u64,
    pub total_points: u64,
    pub streak: u64,
    pub total_checkins: u64,
    pub fee_paid: u64,
}

#[event]
pub struct BulkCheckinCompleted {
    pub payer: Pubkey,
    pub user_count: u8,
    pub total_fee: u64,
    pub slot: u64,
}

#[event]
pub struct ConfigUpdated {
    pub admin: Pubkey,
    pub points_per_checkin: u64,
    pub streak_bonus_per_day: u64,
    pub fee_amount: u64,
}
