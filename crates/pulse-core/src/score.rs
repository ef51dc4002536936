use crate::prelude::*;

/// Persisted progress for one level, matched to a catalog entry by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveRecord {
    pub id: String,
    pub best_score: i32,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub plays: u32,
}
