use super::*;

use std::time::Duration;

use tokio::sync::Notify;

/// Receives per-item progress while the level list is loading.
pub trait ProgressListener {
    fn update_info(&self, icon: Option<&Path>, status: &str, index: usize, is_error: bool);
    fn end(&self);
    fn cancelled(&self) -> bool;
    fn set_total(&self, total: usize);
}

/// How the discovery routine gives control back to the host between
/// candidates. Throttles menu responsiveness during large scans, never
/// correctness.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, enum_iterator::Sequence)]
pub enum YieldMode {
    /// Sleep for a fixed base duration growing linearly with the candidate index.
    Delay,
    NextTick,
    EndOfFrame,
    FixedUpdate,
}

impl Default for YieldMode {
    fn default() -> Self {
        Self::NextTick
    }
}

const DELAY_BASE: Duration = Duration::from_millis(1);

/// Frame boundary notifications from the host loop.
pub struct FrameClock {
    frame: Notify,
    physics: Notify,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            frame: Notify::new(),
            physics: Notify::new(),
        }
    }

    /// Called by the host at the end of every rendered frame.
    pub fn end_frame(&self) {
        self.frame.notify_waiters();
    }

    /// Called by the host on every physics step.
    pub fn physics_step(&self) {
        self.physics.notify_waiters();
    }

    pub async fn end_of_frame(&self) {
        self.frame.notified().await;
    }

    pub async fn fixed_update(&self) {
        self.physics.notified().await;
    }
}

async fn cooperative_yield(mode: YieldMode, clock: &FrameClock, index: usize) {
    match mode {
        YieldMode::Delay => tokio::time::sleep(DELAY_BASE * index as u32).await,
        YieldMode::NextTick => tokio::task::yield_now().await,
        YieldMode::EndOfFrame => clock.end_of_frame().await,
        YieldMode::FixedUpdate => clock.fixed_update().await,
    }
}

fn cancelled(listener: Option<&dyn ProgressListener>) -> bool {
    listener.is_some_and(|listener| listener.cancelled())
}

fn progress(
    listener: Option<&dyn ProgressListener>,
    icon: Option<&Path>,
    status: String,
    index: usize,
    is_error: bool,
) {
    if is_error {
        log::error!("{status}");
    }
    if let Some(listener) = listener {
        listener.update_info(icon, &status, index, is_error);
    }
}

impl ArcadeContext {
    /// Rebuild the level catalog from the arcade directory, then merge in
    /// workshop-subscribed levels when enabled.
    ///
    /// At most one pass runs at a time; a re-entrant call signals the
    /// listener to finish and performs no scan. The loading flag is cleared
    /// and `end` is signalled on every exit path.
    pub async fn load_level_list(
        &mut self,
        workshop: Option<&dyn WorkshopSource>,
        listener: Option<&dyn ProgressListener>,
        on_cancel: Option<&dyn Fn()>,
    ) -> Result<()> {
        if !self.catalog.try_begin_loading() {
            if let Some(listener) = listener {
                listener.end();
            }
            return Ok(());
        }

        let result = self.scan_levels(workshop, listener, on_cancel).await;
        if let Err(err) = &result {
            log::error!("level discovery failed: {err:?}");
        }

        self.catalog.finish_loading();
        if let Some(listener) = listener {
            listener.end();
        }
        result
    }

    async fn scan_levels(
        &mut self,
        workshop: Option<&dyn WorkshopSource>,
        listener: Option<&dyn ProgressListener>,
        on_cancel: Option<&dyn Fn()>,
    ) -> Result<()> {
        let root = self.arcade_path();
        std::fs::create_dir_all(&root).with_context(|| format!("when creating {root:?}"))?;

        let mut dirs = Vec::new();
        for entry in std::fs::read_dir(&root).with_context(|| format!("when listing {root:?}"))? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_dir() {
                log::warn!("Unexpected file in the arcade dir: {path:?}");
                continue;
            }
            dirs.push(path);
        }

        if let Some(listener) = listener {
            listener.set_total(dirs.len());
        }

        let mode = self.settings.yield_mode;
        let clock = Arc::clone(&self.clock);

        self.catalog.local.clear();

        for (index, dir) in dirs.iter().enumerate() {
            cooperative_yield(mode, &clock, index).await;

            if cancelled(listener) {
                if let Some(on_cancel) = on_cancel {
                    on_cancel();
                }
                self.catalog.finish_loading();
                return Ok(());
            }

            let name = dir
                .file_name()
                .and_then(OsStr::to_str)
                .unwrap_or_default()
                .to_string();

            let Some(meta_path) = fs::resolve_metadata(dir) else {
                progress(listener, None, format!("{name}: no metadata file"), index, true);
                continue;
            };
            let mut meta = match fs::read_meta(&meta_path) {
                Ok(meta) => meta,
                Err(err) => {
                    log::error!("failed to read metadata for {name}: {err:?}");
                    progress(
                        listener,
                        None,
                        format!("{name}: malformed metadata"),
                        index,
                        true,
                    );
                    continue;
                }
            };
            if fs::find_audio(dir).is_none() {
                progress(listener, None, format!("{name}: no audio file"), index, true);
                continue;
            }
            if fs::find_level_data(dir).is_none() {
                progress(listener, None, format!("{name}: no level data"), index, true);
                continue;
            }

            if !meta.has_any_id() {
                // Write the generated id back so future scans see a stable one.
                meta.arcade_id = random_arcade_id();
                if let Err(err) = fs::write_meta_current(dir, &meta) {
                    log::error!("failed to write back the arcade id for {name}: {err:?}");
                }
            }

            let mut level = LevelRecord::new(dir.clone(), meta);
            level.save = self.saves.get(level.id()).cloned();

            progress(
                listener,
                level.cover_path().as_deref(),
                format!("Loading arcade level: {name}"),
                index,
                false,
            );
            self.catalog.local.push(Rc::new(level));
        }

        if self.settings.load_workshop {
            if let Some(workshop) = workshop {
                let offset = dirs.len();
                if let Some(listener) = listener {
                    listener.set_total(offset + workshop.level_count());
                }

                self.catalog.remote.clear();

                for (index, level) in workshop.levels().iter().enumerate() {
                    let index = offset + index;
                    cooperative_yield(mode, &clock, index).await;

                    if cancelled(listener) {
                        if let Some(on_cancel) = on_cancel {
                            on_cancel();
                        }
                        self.catalog.finish_loading();
                        return Ok(());
                    }

                    let mut level = (**level).clone();
                    level.save = self.saves.get(level.id()).cloned();

                    progress(
                        listener,
                        level.cover_path().as_deref(),
                        format!("Loading workshop level: {}", level.display_name()),
                        index,
                        false,
                    );
                    self.catalog.remote.push(Rc::new(level));
                }
            }
        }

        self.catalog
            .sort_local(self.settings.local_sort, self.settings.local_descending);
        self.catalog
            .sort_remote(self.settings.remote_sort, self.settings.remote_descending);
        self.catalog.dedup_local();
        self.catalog.dedup_remote();

        Ok(())
    }
}
