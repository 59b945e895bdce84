use serde::{Deserialize, Serialize};

/// Approval is tracked separately by `Milestone::is_approved`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum MilestoneStatus {
    #[default]
    Pending,
    Submitted,
    UnderReview,
}
