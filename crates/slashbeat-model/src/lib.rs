// Songs, notes, charts, world geometry and per-tick input samples

pub mod audio;
pub mod catalog;
mod chart;
mod input;
mod note;
mod note_state;
mod song;
pub mod world;

pub use audio::AudioBuffer;
pub use chart::Chart;
pub use input::{HandSample, InputSnapshot};
pub use note::{CutDirection, Hand, LANE_COUNT, LAYER_COUNT, Lane, Layer, Note};
pub use note_state::{NoteState, NoteStates};
pub use song::{Difficulty, Song};
