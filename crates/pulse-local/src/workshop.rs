use super::*;

use pulse_workshop::Workshop;

/// Provider of already synchronized workshop levels for the discovery
/// routine to merge into the catalog.
pub trait WorkshopSource {
    fn level_count(&self) -> usize;
    /// The owned, sorted collection of subscribed levels.
    fn levels(&self) -> &[Rc<LevelRecord>];
}

/// Subscribed workshop levels mirrored in a content directory on disk.
pub struct WorkshopLibrary {
    client: Option<Arc<Workshop>>,
    levels: Vec<Rc<LevelRecord>>,
}

impl WorkshopLibrary {
    pub fn new(client: Option<&Arc<Workshop>>) -> Self {
        Self {
            client: client.cloned(),
            levels: Vec::new(),
        }
    }

    /// Fetch the subscribed item list and read each item's content
    /// directory like a local package. Items with missing or malformed
    /// content are logged and skipped. Without a client this is a no-op.
    pub async fn sync(&mut self, content_root: &Path) -> Result<()> {
        let Some(client) = self.client.clone() else {
            return Ok(());
        };

        let items = client
            .get_subscribed()
            .await
            .context("when fetching subscribed workshop items")?;

        let mut levels = Vec::with_capacity(items.len());
        for item in items {
            let process = || -> Result<Option<LevelRecord>> {
                let dir = content_root.join(&item.id);
                let Some(meta_path) = fs::resolve_metadata(&dir) else {
                    log::warn!("subscribed item {} has no metadata", item.id);
                    return Ok(None);
                };
                let mut meta = fs::read_meta(&meta_path)?;
                if fs::find_audio(&dir).is_none() || fs::find_level_data(&dir).is_none() {
                    log::warn!("subscribed item {} is missing required assets", item.id);
                    return Ok(None);
                }
                if !id_is_set(&meta.server_id) {
                    meta.server_id = item.id.clone();
                }
                Ok(Some(LevelRecord::new(dir, meta)))
            };
            match process() {
                Ok(Some(level)) => levels.push(Rc::new(level)),
                Ok(None) => {}
                Err(err) => log::error!("failed to read subscribed item: {err:?}"),
            }
        }

        sort_records(&mut levels, LevelSort::Title, false);
        self.levels = levels;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.levels.clear();
    }
}

impl WorkshopSource for WorkshopLibrary {
    fn level_count(&self) -> usize {
        self.levels.len()
    }

    fn levels(&self) -> &[Rc<LevelRecord>] {
        &self.levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sync_without_client_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = WorkshopLibrary::new(None);
        library.sync(dir.path()).await.unwrap();
        assert_eq!(library.level_count(), 0);
    }
}
