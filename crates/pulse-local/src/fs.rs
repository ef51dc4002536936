use super::*;

pub const META_CURRENT: &str = "metadata.vgm";
pub const META_LEGACY: &str = "metadata.lsb";

const AUDIO_NAMES: [&str; 6] = [
    "level.ogg",
    "level.wav",
    "level.mp3",
    "audio.ogg",
    "audio.wav",
    "audio.mp3",
];
const LEVEL_DATA_NAMES: [&str; 2] = ["level.lsb", "level.vgd"];
const COVER_NAMES: [&str; 2] = ["cover.jpg", "level.jpg"];

/// Default directory that holds all arcade data.
pub fn base_path() -> PathBuf {
    if let Some(dirs) = directories::ProjectDirs::from("", "", "pulse-arcade") {
        return dirs.data_dir().to_path_buf();
    }
    std::env::current_dir().unwrap_or_default()
}

/// Root directory containing one subdirectory per level package.
pub fn arcade_path(root: &Path) -> PathBuf {
    root.join("arcade")
}

pub fn saves_path(root: &Path) -> PathBuf {
    root.join("saves.json")
}

pub fn settings_path(root: &Path) -> PathBuf {
    root.join("settings.toml")
}

pub fn collections_path(root: &Path) -> PathBuf {
    root.join("collections")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaFormat {
    Current,
    Legacy,
}

impl MetaFormat {
    pub fn of(path: &Path) -> Self {
        match path.extension().and_then(OsStr::to_str) {
            Some("vgm") => Self::Current,
            _ => Self::Legacy,
        }
    }
}

/// Path of the package's metadata document, preferring the current format.
pub fn resolve_metadata(dir: &Path) -> Option<PathBuf> {
    let current = dir.join(META_CURRENT);
    if current.exists() {
        return Some(current);
    }
    let legacy = dir.join(META_LEGACY);
    legacy.exists().then_some(legacy)
}

fn find_file(dir: &Path, names: &[&str]) -> Option<PathBuf> {
    names
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

pub fn find_audio(dir: &Path) -> Option<PathBuf> {
    find_file(dir, &AUDIO_NAMES)
}

pub fn find_level_data(dir: &Path) -> Option<PathBuf> {
    find_file(dir, &LEVEL_DATA_NAMES)
}

pub fn find_cover(dir: &Path) -> Option<PathBuf> {
    find_file(dir, &COVER_NAMES)
}

/// Read a metadata document, dispatching on the file extension.
pub fn read_meta(path: &Path) -> Result<LevelMeta> {
    let text = std::fs::read_to_string(path).with_context(|| format!("when reading {path:?}"))?;
    let meta = match MetaFormat::of(path) {
        MetaFormat::Current => serde_json::from_str(&text),
        MetaFormat::Legacy => legacy::parse_meta(&text),
    };
    meta.with_context(|| format!("when parsing {path:?}"))
}

/// Rewrite the package metadata in the current format, pretty printed with
/// an indent depth of three.
pub fn write_meta_current(dir: &Path, meta: &LevelMeta) -> Result<()> {
    let path = dir.join(META_CURRENT);
    let file = std::fs::File::create(&path).with_context(|| format!("when creating {path:?}"))?;
    let mut writer = std::io::BufWriter::new(file);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"   ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    meta.serialize(&mut ser)
        .with_context(|| format!("when writing {path:?}"))?;
    Ok(())
}
