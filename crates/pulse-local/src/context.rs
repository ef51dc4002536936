use super::*;

/// Owned catalog-and-queue state shared by the menu surfaces.
///
/// Constructed once, passed around by reference; `reset` starts a fresh
/// lifecycle without touching settings or saves.
pub struct ArcadeContext {
    pub catalog: LevelCatalog,
    pub queue: ArcadeQueue,
    pub settings: ArcadeSettings,
    pub saves: SaveRegistry,
    pub clock: Arc<FrameClock>,
    root: PathBuf,
}

impl ArcadeContext {
    /// A context with default settings and no persisted state read.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            catalog: LevelCatalog::new(),
            queue: ArcadeQueue::new(),
            settings: ArcadeSettings::default(),
            saves: SaveRegistry::default(),
            clock: Arc::new(FrameClock::new()),
            root: root.into(),
        }
    }

    /// Load settings and save records from disk, falling back to defaults.
    pub fn load(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let settings = ArcadeSettings::load(&fs::settings_path(&root));
        let saves = match SaveRegistry::load(&fs::saves_path(&root)) {
            Ok(saves) => saves,
            Err(err) => {
                log::error!("failed to load save records: {err:?}");
                SaveRegistry::default()
            }
        };

        let mut ctx = Self::new(root);
        ctx.settings = settings;
        ctx.saves = saves;
        ctx
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn arcade_path(&self) -> PathBuf {
        fs::arcade_path(&self.root)
    }

    /// Drop every discovered level and the queue built on top of them.
    pub fn reset(&mut self) {
        self.catalog.reset();
        self.queue.clear();
    }
}
