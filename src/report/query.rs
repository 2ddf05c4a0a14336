//! SELECT statement builder for the result table

use serde::{Deserialize, Serialize};

use crate::core::config::DEFAULT_TABLE;

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Parts of a SELECT query
///
/// `table` may be a plain table name or a parenthesized subquery with an alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    pub dimensions: Vec<String>,
    pub table: String,
    pub condition: Option<String>,
    pub group_by: Option<Vec<String>>,
    pub order_by: Option<Vec<String>>,
}

impl QueryParams {
    pub fn new<I, S>(dimensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dimensions: dimensions.into_iter().map(Into::into).collect(),
            table: DEFAULT_TABLE.to_string(),
            condition: None,
            group_by: None,
            order_by: None,
        }
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn filter(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn group_by<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_by = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn order_by<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order_by = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Render to SQL text. Empty clause lists are left out.
    pub fn render(&self) -> String {
        let mut sql = format!("SELECT {}\nFROM {}", self.dimensions.join(", "), self.table);

        if let Some(condition) = &self.condition {
            sql.push_str(&format!("\nWHERE {}", condition));
        }
        if let Some(columns) = self.group_by.as_ref().filter(|c| !c.is_empty()) {
            sql.push_str(&format!("\nGROUP BY {}", columns.join(", ")));
        }
        if let Some(columns) = self.order_by.as_ref().filter(|c| !c.is_empty()) {
            sql.push_str(&format!("\nORDER BY {}", columns.join(", ")));
        }
        sql
    }
}
