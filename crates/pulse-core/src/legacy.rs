//! Backwards compatibility with the legacy metadata document shape.

use crate::prelude::*;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LegacyMeta {
    pub artist: LegacyArtist,
    pub creator: LegacyCreator,
    pub song: LegacySong,
    pub beatmap: LegacyBeatmap,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LegacyArtist {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LegacyCreator {
    pub steam_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LegacySong {
    pub title: String,
    pub description: String,
    pub difficulty: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LegacyBeatmap {
    pub game_id: String,
    pub beatmap_id: String,
}

pub fn convert_meta(legacy: LegacyMeta) -> LevelMeta {
    LevelMeta {
        server_id: legacy.beatmap.game_id,
        arcade_id: String::new(),
        beatmap_id: legacy.beatmap.beatmap_id,
        song_title: legacy.song.title,
        artist: legacy.artist.name,
        creator: legacy.creator.steam_name,
        description: legacy.song.description,
        tags: Vec::new(),
        entry_level: 0,
        difficulty: legacy.song.difficulty,
    }
}

pub fn parse_meta(doc: &str) -> serde_json::Result<LevelMeta> {
    let legacy: LegacyMeta = serde_json::from_str(doc)?;
    Ok(convert_meta(legacy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_legacy_document() {
        let doc = r#"{
            "artist": { "name": "Composer" },
            "creator": { "steam_name": "Builder" },
            "song": { "title": "Tune", "difficulty": 3, "description": "short one" },
            "beatmap": { "game_id": "42", "beatmap_id": "99" }
        }"#;

        let meta = parse_meta(doc).unwrap();
        assert_eq!(meta.server_id, "42");
        assert_eq!(meta.beatmap_id, "99");
        assert_eq!(meta.song_title, "Tune");
        assert_eq!(meta.artist, "Composer");
        assert_eq!(meta.creator, "Builder");
        assert_eq!(meta.difficulty, 3);
        assert!(meta.arcade_id.is_empty());
    }

    #[test]
    fn missing_sections_default() {
        let meta = parse_meta(r#"{ "song": { "title": "Bare" } }"#).unwrap();
        assert_eq!(meta.song_title, "Bare");
        assert!(!meta.has_any_id());
    }
}
