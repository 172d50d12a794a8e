//! Built-in song list.

use crate::song::{Difficulty, Song};

/// Returns the built-in songs in display order.
pub fn catalog() -> Vec<Song> {
    vec![
        Song::new(
            "neon-velocity",
            "Neon Velocity",
            "Cyber Runner",
            140.0,
            160.0,
            Difficulty::Medium,
        )
        .with_url("https://commondatastorage.googleapis.com/codeskulptor-demos/riceracer_assets/music/race2.ogg")
        .with_genre("Synthwave"),
        Song::new(
            "midnight-pulse",
            "Midnight Pulse",
            "Synthwave Boy",
            100.0,
            180.0,
            Difficulty::Easy,
        )
        .with_url("https://commondatastorage.googleapis.com/codeskulptor-assets/Epoq-Lepidoptera.ogg")
        .with_genre("Lo-Fi"),
        Song::new(
            "adrenalin-rush",
            "Adrenalin Rush",
            "Techno Core",
            150.0,
            140.0,
            Difficulty::Hard,
        )
        .with_url("https://commondatastorage.googleapis.com/codeskulptor-demos/riceracer_assets/music/race1.ogg")
        .with_genre("Techno"),
    ]
}

/// Look up a built-in song by id.
pub fn find(id: &str) -> Option<Song> {
    catalog().into_iter().find(|song| song.id == id)
}
