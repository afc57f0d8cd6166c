//! End-to-end behavior of the progression engine
//!
//! Covers the streak rules, achievement unlocking and point/level
//! bookkeeping across sequences of recorded workouts.

mod common;

use std::collections::BTreeSet;

use common::{TestHost, assert_invariants, local_time, unlocked_ids, workout};
use workhome::progress::{
    EvaluationContext, ExternalProgress, ProgressionEvent, StreakOutcome, evaluate,
};
use workhome::{ProgressError, UserStats, record_workout};

#[test]
fn test_first_ever_workout_starts_streak_at_one() {
    let mut host = TestHost::new();
    let outcome = host.record(0, 9);

    assert_eq!(outcome.stats.total_workouts, 1);
    assert_eq!(outcome.stats.current_streak, 1);
    assert_eq!(outcome.stats.best_streak, 1);
    assert_eq!(unlocked_ids(&outcome), vec!["workout_1"]);
    assert_invariants(&outcome.stats);
}

#[test]
fn test_same_day_workouts_do_not_double_increment() {
    let mut host = TestHost::new();
    let first = host.record(0, 8);
    let second = host.record(0, 18);

    assert_eq!(first.stats.current_streak, 1);
    assert_eq!(second.stats.current_streak, 1);
    assert!(second.events.contains(&ProgressionEvent::StreakUpdated {
        outcome: StreakOutcome::Maintained,
        current: 1,
    }));
    assert_eq!(second.stats.total_workouts, 2);
}

#[test]
fn test_consecutive_days_build_streak_and_unlock_tiers() {
    let mut host = TestHost::new();
    let mut unlocked_on = Vec::new();

    for day in 0..7 {
        let outcome = host.record(day, 7);
        assert_eq!(outcome.stats.current_streak, day as u32 + 1);
        for id in unlocked_ids(&outcome) {
            unlocked_on.push((day, id.to_string()));
        }
        assert_invariants(&outcome.stats);
    }

    assert!(unlocked_on.contains(&(2, "streak_3".to_string())));
    assert!(unlocked_on.contains(&(6, "streak_7".to_string())));
    assert_eq!(host.stats.best_streak, 7);
}

#[test]
fn test_gap_of_two_days_resets_streak() {
    let mut host = TestHost::new();
    host.record(0, 7);
    host.record(1, 7);
    host.record(2, 7);
    assert_eq!(host.stats.current_streak, 3);

    // Skip day 3 entirely
    let outcome = host.record(4, 7);
    assert_eq!(outcome.stats.current_streak, 1);
    assert_eq!(outcome.stats.best_streak, 3);
    assert!(outcome.events.contains(&ProgressionEvent::StreakUpdated {
        outcome: StreakOutcome::Reset,
        current: 1,
    }));
}

#[test]
fn test_ten_workouts_without_recent_history() {
    // 9 workouts, a 6-day streak and 500 points carried in, but nothing
    // logged yesterday: the streak resets and workout_10 unlocks.
    let stats = UserStats {
        total_workouts: 9,
        current_streak: 6,
        best_streak: 6,
        total_points: 500,
        level: 1,
        unlocked_achievement_ids: ["workout_1".to_string()].into(),
        ..UserStats::default()
    };

    let outcome = record_workout(
        &stats,
        &[],
        &workout(local_time(30, 14)),
        14,
        &ExternalProgress::default(),
    )
    .unwrap();

    assert_eq!(outcome.stats.total_workouts, 10);
    assert_eq!(outcome.stats.current_streak, 1);
    assert_eq!(outcome.stats.best_streak, 6);
    assert_eq!(unlocked_ids(&outcome), vec!["workout_10"]);
    assert_eq!(outcome.unlocks[0].awarded_points, 200);
    assert_eq!(outcome.stats.total_points, 500 + 50 + 200);
    assert_eq!(outcome.stats.level, 1);
}

#[test]
fn test_ten_workouts_with_nothing_unlocked_also_awards_first_workout() {
    let stats = UserStats {
        total_workouts: 9,
        current_streak: 6,
        best_streak: 6,
        total_points: 500,
        ..UserStats::default()
    };

    let outcome = record_workout(
        &stats,
        &[],
        &workout(local_time(30, 14)),
        14,
        &ExternalProgress::default(),
    )
    .unwrap();

    assert_eq!(unlocked_ids(&outcome), vec!["workout_1", "workout_10"]);
    assert_eq!(outcome.stats.total_points, 500 + 50 + 50 + 200);
    assert_invariants(&outcome.stats);
}

#[test]
fn test_streak_7_unlocks_once() {
    let stats = UserStats {
        current_streak: 7,
        ..UserStats::default()
    };
    let ctx = EvaluationContext::new(10, local_time(0, 10));

    let first = evaluate(&stats, &stats.unlocked_achievement_ids, &ctx).unwrap();
    let streak_7 = first
        .iter()
        .find(|u| u.achievement_id == "streak_7")
        .expect("streak_7 unlocked");
    assert_eq!(streak_7.awarded_points, 250);

    let unlocked: BTreeSet<String> = first.iter().map(|u| u.achievement_id.clone()).collect();
    let second = evaluate(&stats, &unlocked, &ctx).unwrap();
    assert!(second.iter().all(|u| u.achievement_id != "streak_7"));
    assert!(second.is_empty());
}

#[test]
fn test_night_owl_unlocks_exactly_once() {
    let mut host = TestHost::new();

    let late = host.record(0, 22);
    let owls = unlocked_ids(&late)
        .into_iter()
        .filter(|id| *id == "night_owl")
        .count();
    assert_eq!(owls, 1);

    let later = host.record(1, 23);
    assert!(!unlocked_ids(&later).contains(&"night_owl"));
    assert!(host.stats.is_unlocked("night_owl"));
}

#[test]
fn test_invariants_hold_over_long_history() {
    let mut host = TestHost::new();
    let mut previously_unlocked = BTreeSet::new();

    // Irregular schedule: runs of days, gaps, doubles, late nights
    let schedule: &[(u64, u32)] = &[
        (0, 7),
        (1, 7),
        (1, 20),
        (2, 22),
        (3, 6),
        (6, 9),
        (7, 9),
        (8, 21),
        (9, 12),
        (10, 12),
        (11, 12),
        (12, 12),
        (13, 12),
        (14, 12),
        (14, 23),
        (20, 8),
        (21, 8),
        (23, 8),
        (24, 8),
        (25, 8),
    ];

    for &(day, hour) in schedule {
        let outcome = host.record(day, hour);
        assert_invariants(&outcome.stats);
        assert!(
            previously_unlocked.is_subset(&outcome.stats.unlocked_achievement_ids),
            "an unlocked achievement disappeared"
        );
        previously_unlocked = outcome.stats.unlocked_achievement_ids.clone();
    }

    assert_eq!(host.stats.total_workouts, schedule.len() as u32);
    // Days 6 through 14 form the longest run
    assert_eq!(host.stats.best_streak, 9);
    assert_eq!(host.stats.current_streak, 3);
}

#[test]
fn test_points_and_level_progression() {
    let mut host = TestHost::new();

    // 20 daily workouts: 20 * 50 bonus, plus workout_1 (50), workout_10 (200),
    // streak_3 (100), streak_7 (250) and steps tiers once.
    for day in 0..20 {
        let external = if day == 5 {
            ExternalProgress {
                weight_lost_kg: None,
                steps_today: Some(20_500),
            }
        } else {
            ExternalProgress::default()
        };
        host.record_with(day, 10, external);
    }

    let expected = 20 * 50 + 50 + 200 + 100 + 250 + (150 + 250 + 400);
    assert_eq!(host.stats.total_points, expected);
    assert_eq!(host.stats.level, 3);
    assert_invariants(&host.stats);
}

#[test]
fn test_invalid_input_leaves_stats_untouched() {
    let stats = UserStats::default();
    let mut event = workout(local_time(0, 10));
    event.calories_burned = -1;

    let err = record_workout(&stats, &[], &event, 10, &ExternalProgress::default()).unwrap_err();
    assert!(matches!(
        err,
        ProgressError::InvalidArgument { field: "calories_burned", .. }
    ));

    let err = record_workout(
        &stats,
        &[],
        &workout(local_time(0, 10)),
        24,
        &ExternalProgress::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ProgressError::InvalidArgument { field: "current_hour", .. }
    ));
}
