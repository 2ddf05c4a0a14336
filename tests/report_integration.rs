//! Integration tests for storage and reporting
//!
//! Runs a seeded simulation, stores it on disk, reads the daily breakdown
//! back through SQL and checks it against the in-memory computation.

use phishing_drill::core::config::DrillConfig;
use phishing_drill::report::{daily_breakdown, export_breakdown, QueryParams, ResultStore};
use phishing_drill::training::{simulate, RESULT_COLUMNS};

fn config() -> DrillConfig {
    DrillConfig {
        n_users: 30,
        n_simulations: 6,
        training_interval_days: 7,
        seed: Some(1234),
        start: Some("2024-01-01 09:00:00".into()),
        ..DrillConfig::default()
    }
}

#[test]
fn test_store_round_trip_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("training.db");
    let output = simulate(&config()).unwrap();

    {
        let mut store = ResultStore::open(&db).unwrap();
        store.replace_results("training_result", &output.results).unwrap();
    }

    let store = ResultStore::open(&db).unwrap();
    assert_eq!(store.load_results("training_result").unwrap(), output.results);
}

#[test]
fn test_sql_breakdown_matches_in_memory() {
    let output = simulate(&config()).unwrap();
    let mut store = ResultStore::open_in_memory().unwrap();
    store.replace_results("training_result", &output.results).unwrap();

    let from_sql = store.daily_breakdown("training_result").unwrap();
    let in_memory = daily_breakdown(&output.results);
    assert_eq!(from_sql.len(), 6);
    assert_eq!(from_sql.len(), in_memory.len());

    for (a, b) in from_sql.iter().zip(&in_memory) {
        assert_eq!(a.timestamp, b.timestamp);
        assert!((a.fail_pct - b.fail_pct).abs() < 1e-9);
        assert!((a.miss_pct - b.miss_pct).abs() < 1e-9);
        assert!((a.success_pct - b.success_pct).abs() < 1e-9);
        assert!((a.fail_pct + a.miss_pct + a.success_pct - 100.0).abs() < 1e-9);
    }
}

#[test]
fn test_stored_table_exposes_result_columns() {
    let output = simulate(&config()).unwrap();
    let mut store = ResultStore::open_in_memory().unwrap();
    store.replace_results("training_result", &output.results).unwrap();

    let per_user = store
        .query(
            &QueryParams::new(["user_id", "COUNT(*)"])
                .group_by(["user_id"])
                .order_by(["user_id ASC"]),
            |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)),
        )
        .unwrap();
    assert_eq!(per_user.len(), 30);
    assert!(per_user.iter().all(|(_, count)| *count == 6));

    let columns = store
        .query(&QueryParams::new(RESULT_COLUMNS).filter("1 = 0"), |_| Ok(()))
        .unwrap();
    assert!(columns.is_empty());
}

#[test]
fn test_csv_export_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("visualize.csv");
    let output = simulate(&config()).unwrap();

    export_breakdown(&path, &daily_breakdown(&output.results)).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("timestamp,Fail,Miss,Success"));
    assert_eq!(lines.count(), 6);
}
