use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, CreateAccount};
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::MAX_BULK_CHECKINS;
use crate::errors::CheckinError;
use crate::events::BulkCheckinCompleted;
use crate::helpers::apply_check_in;
use crate::state::{CheckinReceipt, GlobalConfig, GlobalStats, UserRecord};

#[derive(Accounts)]
pub struct BulkCheckIn<'info> {
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

    /// Pays the aggregate fee and rent for records created in this batch.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Payer's fee-mint token account the aggregate fee is drawn from.
    #[account(
        mut,
        constraint = payer_token_account.owner == payer.key(),
        constraint = payer_token_account.mint == config.fee_mint,
    )]
    pub payer_token_account: Account<'info, TokenAccount>,

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

pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, BulkCheckIn<'info>>,
    users: Vec<Pubkey>,
) -> Result<Vec<CheckinReceipt>> {
    require!(!users.is_empty(), CheckinError::EmptyBatch);
    require!(users.len() <= MAX_BULK_CHECKINS, CheckinError::BatchTooLarge);
    require!(
        ctx.remaining_accounts.len() == users.len(),
        CheckinError::BatchAccountMismatch
    );

    let total_fee = ctx
        .accounts
        .config
        .fee_amount
        .checked_mul(users.len() as u64)
        .ok_or(CheckinError::MathOverflow)?;

    require!(
        ctx.accounts.payer_token_account.amount >= total_fee,
        CheckinError::FeeTransferFailed
    );

    // One aggregate fee transfer up front; the batch fails here before any
    // record is touched if the payer cannot cover it.
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.payer_token_account.to_account_info(),
            to: ctx.accounts.fee_token_account.to_account_info(),
            authority: ctx.accounts.payer.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, total_fee)?;

    let now = Clock::get()?.slot;
    let payer_info = ctx.accounts.payer.to_account_info();
    let system_program_info = ctx.accounts.system_program.to_account_info();

    let mut receipts = Vec::with_capacity(users.len());
    for (user, record_info) in users.iter().zip(ctx.remaining_accounts.iter()) {
        let mut record = load_or_create_record(
            ctx.program_id,
            user,
            record_info,
            &payer_info,
            &system_program_info,
        )?;

        // Any member failing here aborts the transaction and rolls back
        // everything already written in this batch.
        let receipt = apply_check_in(
            &mut record,
            &mut ctx.accounts.stats,
            &ctx.accounts.config,
            now,
        )?;

        // Write back immediately so a duplicate later in the batch sees
        // this mutation and fails the eligibility check.
        let mut data = record_info.try_borrow_mut_data()?;
        let mut cursor: &mut [u8] = &mut data[..];
        record.try_serialize(&mut cursor)?;

        receipts.push(receipt);
    }

    emit!(BulkCheckinCompleted {
        payer: ctx.accounts.payer.key(),
        user_count: users.len() as u8,
        total_fee,
        slot: now,
    });

    Ok(receipts)
}

/// Loads the canonical record PDA for `user`, creating it on the fly for
/// first-time users with rent paid by the batch payer.
fn load_or_create_record<'info>(
    program_id: &Pubkey,
    user: &Pubkey,
    record_info: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
) -> Result<UserRecord> {
    let (expected, bump) =
        Pubkey::find_program_address(&[UserRecord::SEED, user.as_ref()], program_id);
    require_keys_eq!(*record_info.key, expected, CheckinError::BatchAccountMismatch);

    if record_info.data_is_empty() {
        let space = 8 + UserRecord::INIT_SPACE;
        let lamports = Rent::get()?.minimum_balance(space);
        let bump_bytes = [bump];
        let seeds: &[&[u8]] = &[UserRecord::SEED, user.as_ref(), &bump_bytes];
        system_program::create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: record_info.clone(),
                },
                &[seeds],
            ),
            lamports,
            space as u64,
            program_id,
        )?;
        return Ok(UserRecord {
            authority: *user,
            bump,
            ..UserRecord::default()
        });
    }

    require_keys_eq!(
        *record_info.owner,
        *program_id,
        CheckinError::BatchAccountMismatch
    );
    let data = record_info.try_borrow_data()?;
    let mut slice: &[u8] = &data[..];
    let record = UserRecord::try_deserialize(&mut slice)?;
    Ok(record)
}
