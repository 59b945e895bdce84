use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProjectStatus {
    #[default]
    Open,
    InProgress,
    Closed,
}
