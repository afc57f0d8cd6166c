//! Tests for the file-backed host: locking, atomic saves and weight progress

mod common;

use std::sync::Arc;
use std::thread;

use common::{local_time, workout};
use tempfile::TempDir;
use workhome::ProgressionEngine;
use workhome::store::ProfileStore;

#[test]
fn test_concurrent_updates_do_not_lose_workouts() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = Arc::new(ProfileStore::new(dir.path()));
    let engine = Arc::new(ProgressionEngine::default());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for _ in 0..5 {
                    store
                        .update("casey", |profile| {
                            let event = workout(local_time(0, 12));
                            Ok(profile.record_workout(&engine, event, 12, None)?)
                        })
                        .expect("update succeeds");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    let profile = store.load("casey").unwrap();
    assert_eq!(profile.stats.total_workouts, 40);
    assert_eq!(profile.history.len(), 40);
    assert_eq!(profile.stats.current_streak, 1);
    // 40 * 50 bonus + workout_1 + workout_10
    assert_eq!(profile.stats.total_points, 40 * 50 + 50 + 200);
}

#[test]
fn test_rejected_workout_is_not_persisted() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = ProfileStore::new(dir.path());
    let engine = ProgressionEngine::default();

    store
        .update("casey", |profile| {
            Ok(profile.record_workout(&engine, workout(local_time(3, 9)), 9, None)?)
        })
        .unwrap();

    // Earlier than the recorded workout
    let result = store.update("casey", |profile| {
        Ok(profile.record_workout(&engine, workout(local_time(1, 9)), 9, None)?)
    });
    assert!(result.is_err());

    let profile = store.load("casey").unwrap();
    assert_eq!(profile.stats.total_workouts, 1);
    assert_eq!(profile.history.len(), 1);
}

#[test]
fn test_weight_progress_unlocks_on_next_workout() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = ProfileStore::new(dir.path());
    let engine = ProgressionEngine::default();

    store
        .update("casey", |profile| {
            profile.record_weight(92.0, local_time(0, 7))?;
            profile.record_weight(86.5, local_time(40, 7))?;
            Ok(())
        })
        .unwrap();

    let outcome = store
        .update("casey", |profile| {
            Ok(profile.record_workout(&engine, workout(local_time(40, 8)), 8, Some(10_200))?)
        })
        .unwrap();

    let ids: Vec<&str> = outcome
        .unlocks
        .iter()
        .map(|u| u.achievement_id.as_str())
        .collect();
    assert_eq!(
        ids,
        vec!["workout_1", "weight_1", "weight_3", "weight_5", "steps_10k"]
    );

    let profile = store.load("casey").unwrap();
    assert_eq!(profile.weight_lost_kg(), Some(5));
    assert_eq!(profile.stats.total_points, 50 + 50 + 200 + 400 + 600 + 150);
    assert_eq!(profile.stats.level, 2);
}

#[test]
fn test_profile_survives_reload() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let engine = ProgressionEngine::default();

    {
        let store = ProfileStore::new(dir.path());
        store
            .update("casey", |profile| {
                profile.record_workout(&engine, workout(local_time(0, 22)), 22, None)?;
                profile.record_workout(&engine, workout(local_time(1, 7)), 7, None)?;
                Ok(())
            })
            .unwrap();
    }

    let profile = ProfileStore::new(dir.path()).load("casey").unwrap();
    assert_eq!(profile.stats.current_streak, 2);
    assert!(profile.stats.is_unlocked("night_owl"));
    assert_eq!(profile.history[0].completed_at, local_time(0, 22));
}
