use super::*;

/// A named group of levels browsable as one page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionInfo {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub entries: Vec<CollectionEntry>,
}

/// One collection entry: an id plus cached display fields, kept so a
/// missing level can still be described.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CollectionEntry {
    pub id: String,
    pub name: String,
    pub song_title: String,
    pub creator: String,
    pub server_id: String,
    pub beatmap_id: String,
}

/// Read every `*.json` collection document under `dir`, skipping
/// malformed files.
pub fn load_collections(dir: &Path) -> Result<Vec<CollectionInfo>> {
    let mut collections = Vec::new();
    if !dir.exists() {
        return Ok(collections);
    }

    for entry in std::fs::read_dir(dir).with_context(|| format!("when listing {dir:?}"))? {
        let process = || -> Result<Option<CollectionInfo>> {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(OsStr::to_str) != Some("json") {
                return Ok(None);
            }
            let text = std::fs::read_to_string(&path)?;
            let info =
                serde_json::from_str(&text).with_context(|| format!("when parsing {path:?}"))?;
            Ok(Some(info))
        };
        match process() {
            Ok(Some(info)) => collections.push(info),
            Ok(None) => {}
            Err(err) => log::error!("collection file error: {err:?}"),
        }
    }

    Ok(collections)
}

impl CollectionInfo {
    /// Resolve the entries against the catalog. Entries without a live
    /// level come back as diagnostics keyed by their intended position.
    pub fn resolve(&self, catalog: &LevelCatalog) -> (Vec<Rc<LevelRecord>>, Vec<NullLevel>) {
        let mut levels = Vec::new();
        let mut missing = Vec::new();

        for (index, entry) in self.entries.iter().enumerate() {
            match catalog.get(&entry.id) {
                Some(level) => levels.push(level),
                None => {
                    log::warn!(
                        "collection {}: entry {index} ({}) does not resolve",
                        self.name,
                        entry.name,
                    );
                    missing.push(NullLevel {
                        index,
                        name: entry.name.clone(),
                        song_title: entry.song_title.clone(),
                        creator: entry.creator.clone(),
                        server_id: entry.server_id.clone(),
                        beatmap_id: entry.beatmap_id.clone(),
                    });
                }
            }
        }

        (levels, missing)
    }

    /// Cover art for the collection page: the first entry that resolves
    /// and has a cover image.
    pub fn cover_path(&self, catalog: &LevelCatalog) -> Option<PathBuf> {
        self.entries
            .iter()
            .filter_map(|entry| catalog.get(&entry.id))
            .find_map(|level| level.cover_path())
    }
}
