use anchor_lang::prelude::*;

/// Ledger-wide counters, only ever incremented.
#[account]
#[derive(Debug, Default, InitSpace, PartialEq, Eq)]
pub struct GlobalStats {
    /// Total successful check-ins across all users.
    pub total_checkins: u64,
    /// Distinct users with at least one check-in.
    pub unique_users: u64,
    /// PDA bump seed.
    pub bump: u8,
}

impl GlobalStats {
    pub const SEED: &'static [u8] = b"stats";
}
