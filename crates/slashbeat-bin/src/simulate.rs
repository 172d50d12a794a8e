use anyhow::{Result, bail};
use log::{debug, info};

use slashbeat_input::{AutoplayInput, DeviceInput, InputSource};
use slashbeat_model::{Chart, Song};
use slashbeat_play::{ManualTransport, NoteEvent, PlayResult, Simulation, Transport};

const TICKS_PER_SECOND: f64 = 60.0;

/// Input driven alongside the transport clock.
trait Player: InputSource {
    fn update(&mut self, _now: f64) {}
}

impl Player for AutoplayInput {
    fn update(&mut self, now: f64) {
        AutoplayInput::update(self, now);
    }
}

/// Live input with nobody touching it.
impl Player for DeviceInput {}

/// Play `chart` to the end with autoplay input on a clock-driven transport.
pub fn run(song: &Song, chart: Chart) -> Result<PlayResult> {
    let mut autoplay = AutoplayInput::new(&chart);
    play(song, chart, &mut autoplay)
}

/// Play `chart` with the configured device input and no player activity.
pub fn run_idle(song: &Song, chart: Chart, mut input: DeviceInput) -> Result<PlayResult> {
    if !input.is_ready() {
        bail!("{:?} input is not ready, nothing feeds it in a headless run", input.mode());
    }
    play(song, chart, &mut input)
}

fn play<P: Player>(song: &Song, chart: Chart, player: &mut P) -> Result<PlayResult> {
    let mut sim = Simulation::new(chart, song.duration_seconds);
    let mut transport = ManualTransport::with_length(song.duration_seconds);

    if !sim.start(&*player, &mut transport) {
        bail!("Simulation refused to start");
    }
    info!("Simulating {} ({} notes)", song.title, sim.chart().len());

    let tick = 1.0 / TICKS_PER_SECOND;
    // Generous bound in case the transport never reports the end.
    let max_ticks = ((song.duration_seconds.max(0.0) + 5.0) * TICKS_PER_SECOND) as u64;

    for _ in 0..max_ticks {
        transport.advance(tick);
        player.update(transport.current_time());

        for event in sim.tick(&*player, &mut transport) {
            match *event {
                NoteEvent::Hit { note_id, time, good, .. } => {
                    debug!("{:>8.3} hit  #{} good={}", time, note_id, good)
                }
                NoteEvent::Miss { note_id, time, .. } => debug!("{:>8.3} miss #{}", time, note_id),
            }
        }

        if let Some(result) = sim.result() {
            info!(
                "Finished {}: {} points, rank {}",
                song.title, result.score, result.rank
            );
            return Ok(result);
        }
    }

    bail!("Simulation did not finish within the song length")
}
