use std::collections::BTreeMap;

use anchor_lang::prelude::Pubkey;

use checkin::errors::CheckinError;
use checkin::helpers::apply_check_in;
use checkin::state::{CheckinReceipt, GlobalConfig, GlobalStats, UserRecord};

const WINDOW: u64 = 144;

/// In-memory stand-in for the on-chain account set. Operations commit only
/// on success, mirroring the runtime's all-or-nothing transactions.
struct Ledger {
    config: GlobalConfig,
    stats: GlobalStats,
    records: BTreeMap<Pubkey, UserRecord>,
}

impl Ledger {
    fn new() -> Self {
        Self {
            config: GlobalConfig {
                admin: Pubkey::new_unique(),
                fee_recipient: Pubkey::new_unique(),
                fee_mint: Pubkey::new_unique(),
                points_per_checkin: 100,
                streak_bonus_per_day: 10,
                fee_amount: 1_000,
                window_length: WINDOW,
                bump: 255,
            },
            stats: GlobalStats::default(),
            records: BTreeMap::new(),
        }
    }

    fn check_in(&mut self, user: Pubkey, now: u64) -> anchor_lang::Result<CheckinReceipt> {
        let mut record = self
            .records
            .get(&user)
            .cloned()
            .unwrap_or_else(|| UserRecord {
                authority: user,
                ..UserRecord::default()
            });
        let mut stats = self.stats.clone();

        let receipt = apply_check_in(&mut record, &mut stats, &self.config, now)?;

        self.records.insert(user, record);
        self.stats = stats;
        Ok(receipt)
    }

    fn bulk_check_in(
        &mut self,
        users: &[Pubkey],
        now: u64,
    ) -> anchor_lang::Result<Vec<CheckinReceipt>> {
        let mut staged_records = self.records.clone();
        let mut staged_stats = self.stats.clone();

        let mut receipts = Vec::with_capacity(users.len());
        for user in users {
            let record = staged_records.entry(*user).or_insert_with(|| UserRecord {
                authority: *user,
                ..UserRecord::default()
            });
            receipts.push(apply_check_in(
                record,
                &mut staged_stats,
                &self.config,
                now,
            )?);
        }

        self.records = staged_records;
        self.stats = staged_stats;
        Ok(receipts)
    }

    fn record(&self, user: &Pubkey) -> &UserRecord {
        self.records.get(user).expect("record exists")
    }
}

#[test]
fn first_checkin_then_window_then_reset() {
    let mut ledger = Ledger::new();
    let user = Pubkey::new_unique();

    let r1 = ledger.check_in(user, 100).unwrap();
    assert_eq!(r1.earned, 100);
    assert_eq!(r1.total_points, 100);
    assert_eq!(r1.streak, 1);
    assert_eq!(r1.total_checkins, 1);
    assert_eq!(r1.fee_paid, 1_000);

    // Same slot again: window not elapsed.
    let err = ledger.check_in(user, 100).unwrap_err();
    assert_eq!(err, CheckinError::AlreadyCheckedIn.into());

    // Gap of exactly one window continues the streak.
    let r2 = ledger.check_in(user, 244).unwrap();
    assert_eq!(r2.earned, 110);
    assert_eq!(r2.total_points, 210);
    assert_eq!(r2.streak, 2);
    assert_eq!(r2.total_checkins, 2);

    // Gap of exactly two windows (244 -> 532) resets the streak.
    let r3 = ledger.check_in(user, 532).unwrap();
    assert_eq!(r3.earned, 100);
    assert_eq!(r3.total_points, 310);
    assert_eq!(r3.streak, 1);
    assert_eq!(r3.total_checkins, 3);
}

#[test]
fn rejected_checkin_changes_nothing() {
    let mut ledger = Ledger::new();
    let user = Pubkey::new_unique();

    ledger.check_in(user, 500).unwrap();
    let record_before = ledger.record(&user).clone();
    let stats_before = ledger.stats.clone();

    for now in [500, 501, 500 + WINDOW - 1] {
        let err = ledger.check_in(user, now).unwrap_err();
        assert_eq!(err, CheckinError::AlreadyCheckedIn.into());
    }

    assert_eq!(*ledger.record(&user), record_before);
    assert_eq!(ledger.stats, stats_before);
}

#[test]
fn streak_increments_at_exact_window_cadence() {
    let mut ledger = Ledger::new();
    let user = Pubkey::new_unique();

    let start = 1_000;
    for i in 0..12u64 {
        let receipt = ledger.check_in(user, start + i * WINDOW).unwrap();
        assert_eq!(receipt.streak, i + 1);
    }
}

#[test]
fn streak_boundary_just_under_two_windows_continues() {
    let mut ledger = Ledger::new();
    let user = Pubkey::new_unique();

    ledger.check_in(user, 1_000).unwrap();
    let receipt = ledger.check_in(user, 1_000 + 2 * WINDOW - 1).unwrap();
    assert_eq!(receipt.streak, 2);

    // And from there, a gap of exactly two windows resets.
    let last = 1_000 + 2 * WINDOW - 1;
    let receipt = ledger.check_in(user, last + 2 * WINDOW).unwrap();
    assert_eq!(receipt.streak, 1);
}

#[test]
fn points_accrue_exactly_per_formula() {
    let mut ledger = Ledger::new();
    let user = Pubkey::new_unique();

    let mut expected_total = 0u64;
    let gaps = [0u64, WINDOW, WINDOW, 2 * WINDOW - 1, 3 * WINDOW, WINDOW];
    let mut now = 10_000;
    for gap in gaps {
        now += gap;
        let receipt = ledger.check_in(user, now).unwrap();
        let expected_earned = 100 + (receipt.streak - 1) * 10;
        assert_eq!(receipt.earned, expected_earned);
        expected_total += expected_earned;
        assert_eq!(receipt.total_points, expected_total);
    }
    assert_eq!(ledger.record(&user).total_points, expected_total);
}

#[test]
fn global_totals_match_sums_over_users() {
    let mut ledger = Ledger::new();
    let users: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();

    ledger.check_in(users[0], 1_000).unwrap();
    ledger.check_in(users[1], 1_010).unwrap();
    ledger.check_in(users[0], 1_000 + WINDOW).unwrap();
    ledger.bulk_check_in(&[users[2], users[3]], 1_300).unwrap();
    ledger.check_in(users[1], 1_010 + 5 * WINDOW).unwrap();

    let sum: u64 = ledger.records.values().map(|r| r.total_checkins).sum();
    assert_eq!(ledger.stats.total_checkins, sum);
    assert_eq!(ledger.stats.total_checkins, 6);
    assert_eq!(ledger.stats.unique_users, 4);
    assert_eq!(ledger.records.len(), 4);
}

#[test]
fn bulk_checkin_returns_receipts_in_input_order() {
    let mut ledger = Ledger::new();
    let users: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();

    // Give the middle user an existing streak so receipts differ.
    ledger.check_in(users[1], 2_000).unwrap();

    let receipts = ledger.bulk_check_in(&users, 2_000 + WINDOW).unwrap();
    assert_eq!(receipts.len(), 3);
    assert_eq!(receipts[0].streak, 1);
    assert_eq!(receipts[1].streak, 2);
    assert_eq!(receipts[2].streak, 1);
    assert_eq!(receipts[1].total_checkins, 2);
}

#[test]
fn bulk_checkin_with_ineligible_member_commits_nothing() {
    let mut ledger = Ledger::new();
    let eligible = Pubkey::new_unique();
    let ineligible = Pubkey::new_unique();

    ledger.check_in(ineligible, 5_000).unwrap();
    let stats_before = ledger.stats.clone();
    let records_before = ledger.records.clone();

    let err = ledger
        .bulk_check_in(&[eligible, ineligible], 5_000 + WINDOW - 1)
        .unwrap_err();
    assert_eq!(err, CheckinError::AlreadyCheckedIn.into());

    assert_eq!(ledger.stats, stats_before);
    assert_eq!(ledger.records, records_before);
    assert!(!ledger.records.contains_key(&eligible));
}

#[test]
fn duplicate_user_in_batch_fails_whole_batch() {
    let mut ledger = Ledger::new();
    let user = Pubkey::new_unique();
    let other = Pubkey::new_unique();

    let err = ledger
        .bulk_check_in(&[user, other, user], 7_000)
        .unwrap_err();
    assert_eq!(err, CheckinError::AlreadyCheckedIn.into());
    assert!(ledger.records.is_empty());
    assert_eq!(ledger.stats, GlobalStats::default());
}

#[test]
fn fresh_user_view_state_allows_checkin() {
    let record = UserRecord::default();
    assert!(record.is_new_user());
    assert!(record.can_check_in(123_456, WINDOW));
    assert_eq!(record.total_points, 0);
    assert_eq!(record.current_streak, 0);
}

#[test]
fn admin_value_rules() {
    let mut ledger = Ledger::new();

    let err = ledger.config.set_fee_amount(0).unwrap_err();
    assert_eq!(err, CheckinError::InvalidAmount.into());
    assert_eq!(ledger.config.fee_amount, 1_000);

    let err = ledger.config.set_points_per_checkin(0).unwrap_err();
    assert_eq!(err, CheckinError::InvalidAmount.into());
    assert_eq!(ledger.config.points_per_checkin, 100);

    ledger.config.set_streak_bonus(0).unwrap();
    assert_eq!(ledger.config.streak_bonus_per_day, 0);
    ledger.config.set_streak_bonus(10).unwrap();

    ledger.config.set_fee_amount(5_000).unwrap();
    let user = Pubkey::new_unique();
    let receipt = ledger.check_in(user, 9_000).unwrap();
    assert_eq!(receipt.fee_paid, 5_000);
    assert_eq!(ledger.record(&user).total_fee_paid, 5_000);
}

#[test]
fn zero_streak_bonus_earns_flat_base() {
    let mut ledger = Ledger::new();
    ledger.config.set_streak_bonus(0).unwrap();
    let user = Pubkey::new_unique();

    ledger.check_in(user, 1_000).unwrap();
    let receipt = ledger.check_in(user, 1_000 + WINDOW).unwrap();
    assert_eq!(receipt.streak, 2);
    assert_eq!(receipt.earned, 100);
}
