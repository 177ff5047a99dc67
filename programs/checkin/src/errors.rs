use anchor_lang::prelude::*;

#[error_code]
pub enum CheckinError {
    #[msg("Check-in window has not elapsed yet.")]
    AlreadyCheckedIn,
    #[msg("Token balance is insufficient to cover the check-in fee.")]
    FeeTransferFailed,
    #[msg("Value must be greater than zero.")]
    InvalidAmount,
    #[msg("Only the configured admin can perform this action.")]
    NotAuthorized,
    #[msg("Bulk check-in requires at least one user.")]
    EmptyBatch,
    #[msg("Bulk check-in accepts at most 10 users.")]
    BatchTooLarge,
    #[msg("Remaining accounts must carry one record PDA per listed user, in order.")]
    BatchAccountMismatch,
    #[msg("Arithmetic overflow.")]
    MathOverflow,
}
