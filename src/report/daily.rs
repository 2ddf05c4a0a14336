//! Per-day outcome percentages
//!
//! For each distinct trial timestamp, the share of FAIL, MISS and SUCCESS
//! outcomes across the whole organization, in percent.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::report::query::QueryParams;
use crate::training::outcome::Outcome;
use crate::training::result::SimulationResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBreakdown {
    pub timestamp: String,
    #[serde(rename = "Fail")]
    pub fail_pct: f64,
    #[serde(rename = "Miss")]
    pub miss_pct: f64,
    #[serde(rename = "Success")]
    pub success_pct: f64,
}

impl DailyBreakdown {
    pub fn from_counts(timestamp: String, fail: u64, miss: u64, success: u64) -> Self {
        let total = (fail + miss + success) as f64;
        let pct = |count: u64| if total > 0.0 { count as f64 * 100.0 / total } else { 0.0 };
        Self {
            timestamp,
            fail_pct: pct(fail),
            miss_pct: pct(miss),
            success_pct: pct(success),
        }
    }
}

/// Breakdown computed directly from result rows, ascending by timestamp
pub fn daily_breakdown(results: &[SimulationResult]) -> Vec<DailyBreakdown> {
    // Fixed-width timestamps sort chronologically as strings
    let mut days: BTreeMap<&str, [u64; 3]> = BTreeMap::new();
    for row in results {
        let counts = days.entry(row.timestamp.as_str()).or_insert([0; 3]);
        match row.outcome {
            Outcome::Fail => counts[0] += 1,
            Outcome::Miss => counts[1] += 1,
            Outcome::Success => counts[2] += 1,
        }
    }

    days.into_iter()
        .map(|(timestamp, [fail, miss, success])| {
            DailyBreakdown::from_counts(timestamp.to_string(), fail, miss, success)
        })
        .collect()
}

/// The same breakdown as a query over the stored `table`
pub fn daily_breakdown_query(table: &str) -> QueryParams {
    let inner = format!(
        "(SELECT timestamp, \
         COUNT(CASE WHEN outcome = 'FAIL' THEN 1 END) AS fail, \
         COUNT(CASE WHEN outcome = 'SUCCESS' THEN 1 END) AS success, \
         COUNT(CASE WHEN outcome = 'MISS' THEN 1 END) AS miss\n\
         FROM {}\n\
         GROUP BY timestamp\n\
         ORDER BY timestamp ASC) InnerQuery",
        table
    );

    QueryParams::new([
        "timestamp",
        "fail * 100.0 / (fail + success + miss) AS f_pct",
        "miss * 100.0 / (fail + success + miss) AS m_pct",
        "success * 100.0 / (fail + success + miss) AS s_pct",
    ])
    .table(inner)
    .group_by(["timestamp"])
    .order_by(["timestamp ASC"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::archetype::ArchetypeKind;

    fn row(timestamp: &str, outcome: Outcome) -> SimulationResult {
        SimulationResult {
            timestamp: timestamp.into(),
            user_id: "u".into(),
            name: "Ida".into(),
            archetype_type: ArchetypeKind::Learning,
            outcome,
        }
    }

    #[test]
    fn test_percentages_per_day() {
        let rows = vec![
            row("2024-01-08 09:00:00", Outcome::Success),
            row("2024-01-01 09:00:00", Outcome::Fail),
            row("2024-01-01 09:00:00", Outcome::Miss),
            row("2024-01-01 09:00:00", Outcome::Miss),
            row("2024-01-01 09:00:00", Outcome::Success),
        ];
        let days = daily_breakdown(&rows);
        assert_eq!(days.len(), 2);

        assert_eq!(days[0].timestamp, "2024-01-01 09:00:00");
        assert_eq!(days[0].fail_pct, 25.0);
        assert_eq!(days[0].miss_pct, 50.0);
        assert_eq!(days[0].success_pct, 25.0);

        assert_eq!(days[1].success_pct, 100.0);
        assert_eq!(days[1].fail_pct, 0.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(daily_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_query_groups_by_timestamp() {
        let sql = daily_breakdown_query("training_result").render();
        assert!(sql.contains("FROM training_result"));
        assert!(sql.contains("InnerQuery"));
        assert!(sql.ends_with("GROUP BY timestamp\nORDER BY timestamp ASC"));
    }
}
