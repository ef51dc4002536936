use super::*;

/// Persisted per-level progress, keyed by level identifier.
#[derive(Debug, Clone, Default)]
pub struct SaveRegistry {
    records: HashMap<String, SaveRecord>,
}

impl SaveRegistry {
    /// A missing file is an empty registry; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let reader = std::io::BufReader::new(
            std::fs::File::open(path).with_context(|| format!("when opening {path:?}"))?,
        );
        let records: Vec<SaveRecord> =
            serde_json::from_reader(reader).with_context(|| format!("when parsing {path:?}"))?;

        let mut map = HashMap::new();
        for record in records {
            // Last write wins on duplicate ids.
            map.insert(record.id.clone(), record);
        }
        Ok(Self { records: map })
    }

    pub fn get(&self, id: &str) -> Option<&SaveRecord> {
        self.records.get(id)
    }

    pub fn insert(&mut self, record: SaveRecord) {
        self.records.insert(record.id.clone(), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut records: Vec<&SaveRecord> = self.records.values().collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));

        let writer = std::io::BufWriter::new(
            std::fs::File::create(path).with_context(|| format!("when creating {path:?}"))?,
        );
        serde_json::to_writer(writer, &records)?;
        Ok(())
    }
}
