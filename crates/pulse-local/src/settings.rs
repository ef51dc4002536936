use super::*;

/// User-facing configuration for the arcade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ArcadeSettings {
    /// Whether discovery also pulls in workshop-subscribed levels.
    pub load_workshop: bool,
    pub local_sort: LevelSort,
    pub local_descending: bool,
    pub remote_sort: LevelSort,
    pub remote_descending: bool,
    pub yield_mode: YieldMode,
}

impl Default for ArcadeSettings {
    fn default() -> Self {
        Self {
            load_workshop: true,
            local_sort: LevelSort::Folder,
            local_descending: false,
            remote_sort: LevelSort::Title,
            remote_descending: false,
            yield_mode: YieldMode::NextTick,
        }
    }
}

impl ArcadeSettings {
    /// A missing or unreadable settings file falls back to the defaults.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let load = || -> Result<Self> {
            let text = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&text)?)
        };
        match load() {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("failed to load settings from {path:?}: {err:?}");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)
            .with_context(|| format!("when writing {path:?}"))?;
        Ok(())
    }
}
