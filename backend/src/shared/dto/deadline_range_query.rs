use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive on both ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeadlineRangeQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}
