//! Storage and reporting around training results

pub mod daily;
pub mod export;
pub mod query;
pub mod store;

pub use daily::{daily_breakdown, DailyBreakdown};
pub use export::{export_breakdown, write_breakdown};
pub use query::QueryParams;
pub use store::ResultStore;
