//! SQLite storage for result rows

use std::path::Path;

use rusqlite::{params, Connection, Row};
use tracing::{debug, info};

use crate::core::error::{DrillError, Result};
use crate::report::daily::{daily_breakdown_query, DailyBreakdown};
use crate::report::query::{is_plain_identifier, QueryParams};
use crate::training::result::{SimulationResult, RESULT_COLUMNS};

/// Owns one SQLite connection holding result tables
pub struct ResultStore {
    conn: Connection,
}

fn checked_table(table: &str) -> Result<&str> {
    if is_plain_identifier(table) {
        Ok(table)
    } else {
        Err(DrillError::InvalidIdentifier(table.to_string()))
    }
}

impl ResultStore {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        info!("Opened result store at {}", path.display());
        Ok(Self { conn })
    }

    /// In-memory store, mostly for tests
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Drop and recreate `table`, then insert every row in one transaction
    pub fn replace_results(&mut self, table: &str, rows: &[SimulationResult]) -> Result<usize> {
        let table = checked_table(table)?;
        let columns = RESULT_COLUMNS
            .iter()
            .map(|c| format!("\"{}\" TEXT NOT NULL", c))
            .collect::<Vec<_>>()
            .join(", ");

        let tx = self.conn.transaction()?;
        tx.execute(&format!("DROP TABLE IF EXISTS {}", table), [])?;
        tx.execute(&format!("CREATE TABLE {} ({})", table, columns), [])?;
        {
            let mut stmt = tx.prepare(&format!(
                "INSERT INTO {} (\"timestamp\", user_id, name, \"type\", outcome)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                table
            ))?;
            for row in rows {
                stmt.execute(params![
                    row.timestamp,
                    row.user_id,
                    row.name,
                    row.archetype_type.as_str(),
                    row.outcome.as_str(),
                ])?;
            }
        }
        tx.commit()?;

        info!("Stored {} training results in {}", rows.len(), table);
        Ok(rows.len())
    }

    /// Read every row of `table` back, in insertion order
    pub fn load_results(&self, table: &str) -> Result<Vec<SimulationResult>> {
        let table = checked_table(table)?;
        let mut stmt = self.conn.prepare(&format!(
            "SELECT \"timestamp\", user_id, name, \"type\", outcome FROM {} ORDER BY rowid",
            table
        ))?;

        let raw = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        raw.into_iter()
            .map(|(timestamp, user_id, name, kind, outcome)| -> Result<SimulationResult> {
                Ok(SimulationResult {
                    timestamp,
                    user_id,
                    name,
                    archetype_type: kind.parse()?,
                    outcome: outcome.parse()?,
                })
            })
            .collect()
    }

    /// Run a rendered query, mapping each row with `map`
    pub fn query<T, F>(&self, params: &QueryParams, map: F) -> Result<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let sql = params.render();
        debug!("Querying database with:\n{}", sql);

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], map)?
            .collect::<rusqlite::Result<Vec<T>>>()?;
        Ok(rows)
    }

    /// Per-day outcome percentages of `table`, ascending by timestamp
    pub fn daily_breakdown(&self, table: &str) -> Result<Vec<DailyBreakdown>> {
        let table = checked_table(table)?;
        let rows = self.query(&daily_breakdown_query(table), |row| {
            Ok(DailyBreakdown {
                timestamp: row.get(0)?,
                fail_pct: row.get(1)?,
                miss_pct: row.get(2)?,
                success_pct: row.get(3)?,
            })
        })?;
        info!("Fetched daily breakdown for {} days", rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::archetype::ArchetypeKind;
    use crate::training::outcome::Outcome;

    fn row(timestamp: &str, user: &str, outcome: Outcome) -> SimulationResult {
        SimulationResult {
            timestamp: timestamp.into(),
            user_id: user.into(),
            name: "Mia".into(),
            archetype_type: ArchetypeKind::Unmotivated,
            outcome,
        }
    }

    #[test]
    fn test_replace_and_load() {
        let mut store = ResultStore::open_in_memory().unwrap();
        let rows = vec![
            row("2024-01-01 09:00:00", "a", Outcome::Fail),
            row("2024-01-08 09:00:00", "a", Outcome::Success),
        ];
        assert_eq!(store.replace_results("training_result", &rows).unwrap(), 2);
        assert_eq!(store.load_results("training_result").unwrap(), rows);

        // Replacing drops what was there before
        store.replace_results("training_result", &rows[..1]).unwrap();
        assert_eq!(store.load_results("training_result").unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_outcome_tag_is_rejected() {
        let mut store = ResultStore::open_in_memory().unwrap();
        store
            .replace_results("training_result", &[row("2024-01-01 09:00:00", "a", Outcome::Miss)])
            .unwrap();
        store
            .conn
            .execute("UPDATE training_result SET outcome = 'MAYBE'", [])
            .unwrap();
        assert!(matches!(
            store.load_results("training_result"),
            Err(DrillError::InvalidOutcome(_))
        ));
    }

    #[test]
    fn test_rejects_unsafe_table() {
        let mut store = ResultStore::open_in_memory().unwrap();
        assert!(matches!(
            store.replace_results("x; DROP TABLE y", &[]),
            Err(DrillError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_sql_breakdown() {
        let mut store = ResultStore::open_in_memory().unwrap();
        let rows = vec![
            row("2024-01-01 09:00:00", "a", Outcome::Fail),
            row("2024-01-01 09:00:00", "b", Outcome::Miss),
            row("2024-01-08 09:00:00", "a", Outcome::Success),
            row("2024-01-08 09:00:00", "b", Outcome::Success),
        ];
        store.replace_results("training_result", &rows).unwrap();

        let days = store.daily_breakdown("training_result").unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].fail_pct, 50.0);
        assert_eq!(days[0].miss_pct, 50.0);
        assert_eq!(days[0].success_pct, 0.0);
        assert_eq!(days[1].success_pct, 100.0);
    }
}
