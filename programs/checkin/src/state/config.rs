use anchor_lang::prelude::*;

use crate::errors::CheckinError;

#[account]
#[derive(Debug, InitSpace, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Admin who can update ledger parameters (fixed at initialization).
    pub admin: Pubkey,
    /// Wallet whose token account receives check-in fees.
    pub fee_recipient: Pubkey,
    /// SPL mint the check-in fee is denominated in.
    pub fee_mint: Pubkey,
    /// Base points granted per check-in.
    pub points_per_checkin: u64,
    /// Extra points per consecutive day beyond the first.
    pub streak_bonus_per_day: u64,
    /// Fee per check-in in minor units of `fee_mint`.
    pub fee_amount: u64,
    /// Slots that must elapse before a user may check in again.
    pub window_length: u64,
    /// PDA bump seed.
    pub bump: u8,
}

impl GlobalConfig {
    pub const SEED: &'static [u8] = b"config";

    pub fn set_points_per_checkin(&mut self, value: u64) -> Result<()> {
        require!(value > 0, CheckinError::InvalidAmount);
        self.points_per_checkin = value;
        Ok(())
    }

    /// Zero is valid: check-ins then earn the flat base only.
    pub fn set_streak_bonus(&mut self, value: u64) -> Result<()> {
        self.streak_bonus_per_day = value;
        Ok(())
    }

    pub fn set_fee_amount(&mut self, value: u64) -> Result<()> {
        require!(value > 0, CheckinError::InvalidAmount);
        self.fee_amount = value;
        Ok(())
    }
}
