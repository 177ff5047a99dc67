/// Default base points per check-in.
pub const DEFAULT_POINTS_PER_CHECKIN: u64 = 100;

/// Default bonus points per consecutive day beyond the first.
pub const DEFAULT_STREAK_BONUS_PER_DAY: u64 = 10;

/// Default check-in fee in minor units of the fee mint.
pub const DEFAULT_FEE_AMOUNT: u64 = 1_000;

/// Default re-check-in window in slots.
pub const DEFAULT_WINDOW_LENGTH: u64 = 144;

/// Maximum users accepted by a single bulk check-in.
pub const MAX_BULK_CHECKINS: usize = 10;
