use super::*;

/// Text transport for the queue clipboard document.
pub trait ClipboardIo {
    fn get_text(&mut self) -> Result<String>;
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard backed implementation.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl ClipboardIo for SystemClipboard {
    fn get_text(&mut self) -> Result<String> {
        Ok(self.inner.get_text()?)
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        Ok(self.inner.set_text(text)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct QueueDoc {
    queue: Vec<QueueEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct QueueEntry {
    id: String,
}

/// User-curated ordered play sequence.
///
/// Holds identifiers, never records: entries are resolved against the
/// catalog on demand and can go stale with it.
#[derive(Debug, Default)]
pub struct ArcadeQueue {
    ids: Vec<String>,
    revision: u64,
}

impl ArcadeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a level by id. Fails when the id is unknown to the catalog;
    /// a level already queued is kept at its first position.
    pub fn push(&mut self, catalog: &LevelCatalog, id: &str) -> bool {
        let Some(level) = catalog.get(id) else {
            log::error!("cannot queue unknown level {id}");
            return false;
        };
        let id = level.id().to_string();
        if self.ids.contains(&id) {
            return false;
        }
        self.ids.push(id);
        self.revision += 1;
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|queued| queued != id);
        let removed = self.ids.len() != before;
        if removed {
            self.revision += 1;
        }
        removed
    }

    pub fn clear(&mut self) {
        self.ids.clear();
        self.revision += 1;
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|queued| queued == id)
    }

    /// Bumped on every mutation; a queue display refreshes when it changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Current records in queue order, skipping entries that no longer
    /// resolve against the catalog.
    pub fn resolve(&self, catalog: &LevelCatalog) -> Vec<Rc<LevelRecord>> {
        let mut levels = Vec::with_capacity(self.ids.len());
        for id in &self.ids {
            match catalog.get(id) {
                Some(level) => levels.push(level),
                None => log::warn!("queued level {id} no longer resolves"),
            }
        }
        levels
    }

    /// Write the queue to the clipboard as a json document of ids.
    pub fn copy_to_clipboard(&self, clip: &mut dyn ClipboardIo) -> Result<()> {
        let doc = QueueDoc {
            queue: self
                .ids
                .iter()
                .map(|id| QueueEntry { id: id.clone() })
                .collect(),
        };
        clip.set_text(&serde_json::to_string(&doc)?)
    }

    /// Rebuild the queue from a clipboard document.
    ///
    /// A document without a `queue` field is ignored. Anything else is a
    /// destructive replace: unresolvable ids are logged and skipped, and a
    /// malformed document leaves the queue cleared rather than restoring
    /// the previous contents.
    pub fn paste_from_clipboard(&mut self, clip: &mut dyn ClipboardIo, catalog: &LevelCatalog) {
        let text = match clip.get_text() {
            Ok(text) => text,
            Err(err) => {
                log::error!("failed to read the clipboard: {err:?}");
                return;
            }
        };

        let doc: serde_json::Value = match serde_json::from_str(&text) {
            Ok(doc) => doc,
            Err(err) => {
                self.clear();
                log::error!("failed to parse the queue from the clipboard: {err:?}");
                return;
            }
        };
        let Some(entries) = doc.get("queue").and_then(serde_json::Value::as_array) else {
            return;
        };

        self.clear();
        for entry in entries {
            let Some(id) = entry.get("id").and_then(serde_json::Value::as_str) else {
                log::error!("queue entry without an id: {entry}");
                continue;
            };
            match catalog.get(id) {
                Some(level) => {
                    let id = level.id().to_string();
                    if !self.ids.contains(&id) {
                        self.ids.push(id);
                    }
                }
                None => log::error!("queued level {id} is not in the catalog"),
            }
        }
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use anyhow::anyhow;

    #[derive(Default)]
    struct FakeClipboard {
        text: Option<String>,
    }

    impl ClipboardIo for FakeClipboard {
        fn get_text(&mut self) -> Result<String> {
            self.text.clone().ok_or_else(|| anyhow!("clipboard is empty"))
        }

        fn set_text(&mut self, text: &str) -> Result<()> {
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    fn catalog_with(ids: &[&str]) -> LevelCatalog {
        let mut catalog = LevelCatalog::new();
        for id in ids {
            let meta = LevelMeta {
                arcade_id: id.to_string(),
                song_title: format!("Song {id}"),
                ..LevelMeta::default()
            };
            catalog
                .local
                .push(Rc::new(LevelRecord::new(PathBuf::from("arcade").join(id), meta)));
        }
        catalog
    }

    #[test]
    fn push_rejects_unknown_and_duplicate() {
        let catalog = catalog_with(&["a"]);
        let mut queue = ArcadeQueue::new();

        assert!(queue.push(&catalog, "a"));
        assert!(!queue.push(&catalog, "a"));
        assert!(!queue.push(&catalog, "missing"));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn empty_queue_exports_empty_document() {
        let queue = ArcadeQueue::new();
        let mut clip = FakeClipboard::default();
        queue.copy_to_clipboard(&mut clip).unwrap();
        assert_eq!(clip.text.as_deref(), Some(r#"{"queue":[]}"#));
    }

    #[test]
    fn export_import_round_trip() {
        let catalog = catalog_with(&["a", "b", "c"]);
        let mut queue = ArcadeQueue::new();
        queue.push(&catalog, "c");
        queue.push(&catalog, "a");

        let mut clip = FakeClipboard::default();
        queue.copy_to_clipboard(&mut clip).unwrap();
        assert_eq!(
            clip.text.as_deref(),
            Some(r#"{"queue":[{"id":"c"},{"id":"a"}]}"#)
        );

        queue.paste_from_clipboard(&mut clip, &catalog);
        assert_eq!(queue.ids(), ["c", "a"]);
    }

    #[test]
    fn import_collapses_duplicates() {
        let catalog = catalog_with(&["a", "b"]);
        let mut queue = ArcadeQueue::new();
        let mut clip = FakeClipboard::default();
        clip.text = Some(r#"{"queue":[{"id":"b"},{"id":"a"},{"id":"b"}]}"#.to_string());

        queue.paste_from_clipboard(&mut clip, &catalog);
        assert_eq!(queue.ids(), ["b", "a"]);
    }

    #[test]
    fn import_skips_unresolved_ids() {
        let catalog = LevelCatalog::new();
        let mut queue = ArcadeQueue::new();
        let mut clip = FakeClipboard::default();
        clip.text = Some(r#"{"queue":[{"id":"nonexistent"}]}"#.to_string());

        queue.paste_from_clipboard(&mut clip, &catalog);
        assert!(queue.is_empty());
    }

    #[test]
    fn import_without_queue_field_is_a_noop() {
        let catalog = catalog_with(&["a"]);
        let mut queue = ArcadeQueue::new();
        queue.push(&catalog, "a");

        let mut clip = FakeClipboard::default();
        clip.text = Some(r#"{"playlist":[{"id":"a"}]}"#.to_string());

        queue.paste_from_clipboard(&mut clip, &catalog);
        assert_eq!(queue.ids(), ["a"]);
    }

    #[test]
    fn malformed_import_leaves_queue_cleared() {
        let catalog = catalog_with(&["a"]);
        let mut queue = ArcadeQueue::new();
        queue.push(&catalog, "a");

        let mut clip = FakeClipboard::default();
        clip.text = Some("definitely not json".to_string());

        queue.paste_from_clipboard(&mut clip, &catalog);
        assert!(queue.is_empty());
    }

    #[test]
    fn import_prefers_remote_records() {
        let mut catalog = catalog_with(&["shared"]);
        let remote_meta = LevelMeta {
            server_id: "shared".to_string(),
            song_title: "Remote".to_string(),
            ..LevelMeta::default()
        };
        catalog.remote.push(Rc::new(LevelRecord::new(
            PathBuf::from("ws/shared"),
            remote_meta,
        )));

        let mut queue = ArcadeQueue::new();
        let mut clip = FakeClipboard::default();
        clip.text = Some(r#"{"queue":[{"id":"shared"}]}"#.to_string());

        queue.paste_from_clipboard(&mut clip, &catalog);
        let resolved = queue.resolve(&catalog);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].meta.song_title, "Remote");
    }

    #[test]
    fn revision_tracks_mutations() {
        let catalog = catalog_with(&["a"]);
        let mut queue = ArcadeQueue::new();
        let start = queue.revision();

        queue.push(&catalog, "a");
        assert!(queue.revision() > start);

        let after_push = queue.revision();
        queue.remove("a");
        assert!(queue.revision() > after_push);

        // Failed pushes leave the revision alone.
        let after_remove = queue.revision();
        queue.push(&catalog, "missing");
        assert_eq!(queue.revision(), after_remove);
    }

    #[test]
    fn stale_entries_are_skipped_on_resolve() {
        let catalog = catalog_with(&["a", "b"]);
        let mut queue = ArcadeQueue::new();
        queue.push(&catalog, "a");
        queue.push(&catalog, "b");

        let shrunk = catalog_with(&["b"]);
        let resolved = queue.resolve(&shrunk);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id(), "b");
    }
}
