mod catalog;
mod collection;
mod context;
mod discover;
mod queue;
mod saves;
mod settings;
mod workshop;

pub mod fs;

pub use self::{
    catalog::*, collection::*, context::*, discover::*, queue::*, saves::*, settings::*,
    workshop::*,
};

use std::{
    cell::Cell,
    collections::{HashMap, HashSet},
    ffi::OsStr,
    path::{Path, PathBuf},
    rc::Rc,
    sync::Arc,
};

use anyhow::{Context as _, Result};
use pulse_core::prelude::*;

/// One discoverable level: a package directory plus its parsed metadata.
#[derive(Debug, Clone)]
pub struct LevelRecord {
    /// Path to the package directory containing the data files.
    pub path: PathBuf,
    pub meta: LevelMeta,
    /// Persisted progress, when a save record matches this level's id.
    pub save: Option<SaveRecord>,
}

impl LevelRecord {
    pub fn new(path: PathBuf, meta: LevelMeta) -> Self {
        Self {
            path,
            meta,
            save: None,
        }
    }

    /// Effective identifier: the first set id, falling back to the folder name.
    pub fn id(&self) -> &str {
        self.meta.any_id().unwrap_or_else(|| self.folder_name())
    }

    pub fn folder_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or_default()
    }

    pub fn display_name(&self) -> &str {
        if self.meta.song_title.is_empty() {
            self.folder_name()
        } else {
            &self.meta.song_title
        }
    }

    pub fn matches_id(&self, id: &str) -> bool {
        id_is_set(id)
            && [
                &self.meta.server_id,
                &self.meta.beatmap_id,
                &self.meta.arcade_id,
            ]
            .into_iter()
            .any(|own| own.as_str() == id)
    }

    /// Cover icon lookup is deferred until a menu actually needs it.
    pub fn cover_path(&self) -> Option<PathBuf> {
        fs::find_cover(&self.path)
    }
}
