// Game configuration stored as JSON

mod config;

pub use config::{
    CustomTrackConfig, DEFAULT_CONFIG_FILE, GameConfig, MAX_CUSTOM_BPM, MIN_CUSTOM_BPM,
    TouchConfig,
};
