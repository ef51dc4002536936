use crate::prelude::*;

/// Key a catalog collection is ordered by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, enum_iterator::Sequence)]
pub enum LevelSort {
    Title,
    Artist,
    Creator,
    Folder,
    Difficulty,
}

impl Default for LevelSort {
    fn default() -> Self {
        Self::Folder
    }
}

impl LevelSort {
    /// The next key in UI cycling order, wrapping around.
    pub fn next(self) -> Self {
        enum_iterator::next_cycle(&self).unwrap_or(self)
    }
}
