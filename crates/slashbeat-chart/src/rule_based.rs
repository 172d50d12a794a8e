use log::{debug, warn};
use rand::Rng;

use slashbeat_model::{Chart, CutDirection, Difficulty, Hand, Lane, Layer, Note, Song};

/// Beats skipped before the first note.
const LEAD_IN_BEATS: i64 = 8;
/// Seconds left empty at the end of the song.
const TAIL_SECONDS: f64 = 5.0;
/// Beats per pattern phase.
const PHASE_LENGTH: i64 = 8;
/// Beat counts above this come from a tempo no player could follow.
const MAX_BEATS: f64 = 1_000_000.0;

/// Builds a chart from the song's tempo, length and difficulty.
///
/// The beat grid is fully determined by the song; `rng` only picks outer
/// lanes, centre lanes and hands in the phases that randomize them.
pub fn generate_from_song<R: Rng + ?Sized>(song: &Song, rng: &mut R) -> Chart {
    let Some(beat) = song.beat_duration() else {
        warn!("Song {} has unusable BPM {}, chart is empty", song.id, song.bpm);
        return Chart::default();
    };

    let last_beat = ((song.duration_seconds - TAIL_SECONDS) / beat).floor();
    if last_beat > MAX_BEATS {
        warn!("Song {} needs {} beats at {} BPM, chart is empty", song.id, last_beat, song.bpm);
        return Chart::default();
    }
    let last_beat = if last_beat.is_finite() { last_beat as i64 } else { 0 };

    let mut builder = NoteBuilder::default();
    for i in LEAD_IN_BEATS..last_beat {
        if !keeps_beat(song.difficulty, i) {
            continue;
        }
        let t = i as f64 * beat;

        match (i / PHASE_LENGTH) % 4 {
            0 => builder.alternating(i, t, Layer::Low),
            1 => {
                if i % 4 == 0 && song.difficulty != Difficulty::Easy {
                    builder.double(t, Layer::Mid, CutDirection::Any);
                } else {
                    builder.alternating(i, t, Layer::Low);
                }
            }
            2 => {
                if song.difficulty == Difficulty::Hard && i % 2 == 0 {
                    builder.push(t, Lane::InnerLeft, Layer::Low, Hand::Left, CutDirection::Down);
                    builder.push(
                        t + beat / 2.0,
                        Lane::InnerRight,
                        Layer::Low,
                        Hand::Right,
                        CutDirection::Down,
                    );
                } else {
                    let lane = if rng.gen_bool(0.5) {
                        Lane::OuterLeft
                    } else {
                        Lane::OuterRight
                    };
                    let hand = random_hand(rng);
                    builder.push(t, lane, Layer::Low, hand, CutDirection::Any);
                }
            }
            _ => {
                if i % 2 == 0 {
                    let lane = if rng.gen_bool(0.5) {
                        Lane::InnerLeft
                    } else {
                        Lane::InnerRight
                    };
                    let hand = random_hand(rng);
                    builder.push(t, lane, Layer::Mid, hand, CutDirection::Any);
                }
            }
        }
    }

    let chart = Chart::new(builder.notes);
    debug!(
        "Generated {} notes for {} ({}, {} BPM)",
        chart.len(),
        song.id,
        song.difficulty,
        song.bpm
    );
    chart
}

fn keeps_beat(difficulty: Difficulty, i: i64) -> bool {
    match difficulty {
        Difficulty::Easy => i % 2 == 0,
        Difficulty::Medium => i % 8 != 7,
        Difficulty::Hard => true,
    }
}

fn random_hand<R: Rng + ?Sized>(rng: &mut R) -> Hand {
    if rng.gen_bool(0.5) { Hand::Left } else { Hand::Right }
}

/// Assigns sequential ids as notes are emitted.
#[derive(Default)]
struct NoteBuilder {
    notes: Vec<Note>,
}

impl NoteBuilder {
    fn push(&mut self, time: f64, lane: Lane, layer: Layer, hand: Hand, cut: CutDirection) {
        let id = self.notes.len() as u32;
        self.notes.push(Note::new(id, time, lane, layer, hand, cut));
    }

    /// Even beats go to the left hand on lane 1, odd beats to the right on lane 2.
    fn alternating(&mut self, i: i64, time: f64, layer: Layer) {
        if i % 2 == 0 {
            self.push(time, Lane::InnerLeft, layer, Hand::Left, CutDirection::Any);
        } else {
            self.push(time, Lane::InnerRight, layer, Hand::Right, CutDirection::Any);
        }
    }

    fn double(&mut self, time: f64, layer: Layer, cut: CutDirection) {
        self.push(time, Lane::InnerLeft, layer, Hand::Left, cut);
        self.push(time, Lane::InnerRight, layer, Hand::Right, cut);
    }
}
