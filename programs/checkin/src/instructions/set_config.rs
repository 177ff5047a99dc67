use anchor_lang::prelude::*;

use crate::errors::CheckinError;
use crate::events::ConfigUpdated;
use crate::state::GlobalConfig;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [GlobalConfig::SEED],
        bump = config.bump,
        has_one = admin @ CheckinError::NotAuthorized,
    )]
    pub config: Account<'info, GlobalConfig>,
}

pub fn set_points_per_checkin(ctx: Context<UpdateConfig>, value: u64) -> Result<()> {
    ctx.accounts.config.set_points_per_checkin(value)?;
    log_update(&ctx.accounts.config);
    Ok(())
}

pub fn set_streak_bonus(ctx: Context<UpdateConfig>, value: u64) -> Result<()> {
    ctx.accounts.config.set_streak_bonus(value)?;
    log_update(&ctx.accounts.config);
    Ok(())
}

pub fn set_fee_amount(ctx: Context<UpdateConfig>, value: u64) -> Result<()> {
    ctx.accounts.config.set_fee_amount(value)?;
    log_update(&ctx.accounts.config);
    Ok(())
}

fn log_update(config: &GlobalConfig) {
    msg!(
        "set_config: points_per_checkin={} streak_bonus_per_day={} fee_amount={}",
        config.points_per_checkin,
        config.streak_bonus_per_day,
        config.fee_amount,
    );
    emit!(ConfigUpdated {
        admin: config.admin,
        points_per_checkin: config.points_per_checkin,
        streak_bonus_per_day: config.streak_bonus_per_day,
        fee_amount: config.fee_amount,
    });
}
