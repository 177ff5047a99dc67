use anchor_lang::prelude::*;

#[account]
#[derive(Debug, Default, InitSpace, PartialEq, Eq)]
pub struct UserRecord {
    /// Wallet that owns this record.
    pub authority: Pubkey,
    /// Slot of the last successful check-in (0 = never checked in).
    pub last_checkin_slot: u64,
    /// Lifetime points earned.
    pub total_points: u64,
    /// Consecutive-window streak; resets to 1 on a missed window.
    pub current_streak: u64,
    /// Lifetime successful check-ins.
    pub total_checkins: u64,
    /// Lifetime fees paid in minor units of the fee mint.
    pub total_fee_paid: u64,
    /// PDA bump seed.
    pub bump: u8,
}

impl UserRecord {
    pub const SEED: &'static [u8] = b"user";

    pub fn is_new_user(&self) -> bool {
        self.last_checkin_slot == 0
    }

    /// Eligibility gate: first-timers may always check in; everyone else
    /// must wait out the full window since their last check-in.
    pub fn can_check_in(&self, now: u64, window_length: u64) -> bool {
        self.is_new_user() || now.saturating_sub(self.last_checkin_slot) >= window_length
    }
}
