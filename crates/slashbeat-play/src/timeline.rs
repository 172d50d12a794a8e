//! Spawn-time activation of chart notes.

use slashbeat_model::Chart;
use slashbeat_model::world::spawn_lead_time;

/// Activation cursor over a chart.
///
/// Notes enter the active set in chart order once they are within the
/// spawn lead time of the clock, and leave it when resolved.
#[derive(Debug, Clone)]
pub struct NoteTimeline {
    cursor: usize,
    active: Vec<usize>,
    lead_time: f64,
}

impl Default for NoteTimeline {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteTimeline {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            active: Vec::new(),
            lead_time: spawn_lead_time(),
        }
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.active.clear();
    }

    /// Activate every note due by `now`. Returns how many were activated.
    pub fn activate(&mut self, chart: &Chart, now: f64) -> usize {
        let notes = chart.notes();
        let start = self.cursor;
        while self.cursor < notes.len() && notes[self.cursor].time - self.lead_time <= now {
            self.active.push(self.cursor);
            self.cursor += 1;
        }
        self.cursor - start
    }

    /// Chart indices of active notes, in activation order.
    pub fn active(&self) -> &[usize] {
        &self.active
    }

    /// Remove the entry at `position` in the active list.
    pub(crate) fn deactivate_at(&mut self, position: usize) -> usize {
        self.active.remove(position)
    }

    /// Number of notes activated so far.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn lead_time(&self) -> f64 {
        self.lead_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slashbeat_model::{CutDirection, Hand, Lane, Layer, Note};

    fn chart(times: &[f64]) -> Chart {
        Chart::new(
            times
                .iter()
                .enumerate()
                .map(|(i, &t)| {
                    Note::new(i as u32, t, Lane::InnerLeft, Layer::Low, Hand::Left, CutDirection::Any)
                })
                .collect(),
        )
    }

    #[test]
    fn test_activation_is_ordered_and_once() {
        let chart = chart(&[3.0, 4.0, 4.0, 10.0]);
        let mut timeline = NoteTimeline::new();

        assert_eq!(timeline.activate(&chart, -0.1), 0);
        assert_eq!(timeline.activate(&chart, 0.0), 1);
        assert_eq!(timeline.activate(&chart, 0.0), 0);
        assert_eq!(timeline.activate(&chart, 1.0), 2);
        assert_eq!(timeline.active(), &[0, 1, 2]);

        // A large jump activates everything outstanding, in order.
        assert_eq!(timeline.activate(&chart, 100.0), 1);
        assert_eq!(timeline.active(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_reset() {
        let chart = chart(&[1.0]);
        let mut timeline = NoteTimeline::new();
        timeline.activate(&chart, 5.0);
        timeline.reset();
        assert_eq!(timeline.cursor(), 0);
        assert!(timeline.active().is_empty());
    }
}
