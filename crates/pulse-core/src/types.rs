use crate::prelude::*;

/// Metadata carried by a level package.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LevelMeta {
    pub server_id: String,
    pub arcade_id: String,
    pub beatmap_id: String,
    pub song_title: String,
    pub artist: String,
    pub creator: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Index of the level that plays first in a multi-level package.
    pub entry_level: usize,
    pub difficulty: i32,
}

impl LevelMeta {
    /// The first set identifier, server id taking precedence.
    pub fn any_id(&self) -> Option<&str> {
        [&self.server_id, &self.beatmap_id, &self.arcade_id]
            .into_iter()
            .map(String::as_str)
            .find(|id| id_is_set(id))
    }

    pub fn has_any_id(&self) -> bool {
        self.any_id().is_some()
    }
}

/// Descriptor of a subscribed workshop item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemInfo {
    pub id: String,
    pub title: String,
    pub owner: String,
}

/// Last known fields of a catalog entry that failed to resolve to a live
/// level, keyed by the entry's intended position. Diagnostic only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NullLevel {
    pub index: usize,
    pub name: String,
    pub song_title: String,
    pub creator: String,
    pub server_id: String,
    pub beatmap_id: String,
}
