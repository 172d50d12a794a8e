use serde::{Deserialize, Serialize};

use crate::note::Note;

/// Immutable, time-ordered note sequence.
///
/// Runtime hit/miss state is kept outside the chart in an index-aligned
/// [`NoteStates`](crate::NoteStates) arena.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Note>", into = "Vec<Note>")]
pub struct Chart {
    notes: Vec<Note>,
}

impl Chart {
    /// Builds a chart, stable-sorting the notes by time.
    pub fn new(mut notes: Vec<Note>) -> Self {
        notes.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { notes }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn is_time_ordered(&self) -> bool {
        self.notes.windows(2).all(|w| w[0].time <= w[1].time)
    }

    /// Time of the last note, or 0 for an empty chart.
    pub fn last_time(&self) -> f64 {
        self.notes.last().map_or(0.0, |n| n.time)
    }
}

impl From<Vec<Note>> for Chart {
    fn from(notes: Vec<Note>) -> Self {
        Self::new(notes)
    }
}

impl From<Chart> for Vec<Note> {
    fn from(chart: Chart) -> Self {
        chart.notes
    }
}
