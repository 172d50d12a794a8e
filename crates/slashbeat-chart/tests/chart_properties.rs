use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use slashbeat_chart::{generate_from_audio, generate_from_song};
use slashbeat_model::catalog::catalog;
use slashbeat_model::{Chart, Difficulty, LANE_COUNT, LAYER_COUNT, Song};

fn assert_well_formed(chart: &Chart) {
    assert!(chart.is_time_ordered());
    for note in chart.notes() {
        assert!(note.lane.index() < LANE_COUNT);
        assert!(note.layer.index() < LAYER_COUNT);
        assert!(note.time.is_finite());
    }
}

fn difficulty(index: usize) -> Difficulty {
    Difficulty::all()[index % 3]
}

#[test]
fn test_catalog_charts_are_well_formed() {
    let mut rng = StdRng::seed_from_u64(2024);
    for song in catalog() {
        let chart = generate_from_song(&song, &mut rng);
        assert!(!chart.is_empty(), "{}", song.id);
        assert_well_formed(&chart);
    }
}

#[test]
fn test_easy_120_bpm_lands_on_whole_seconds() {
    let song = Song::new("grid", "Grid", "Tester", 120.0, 60.0, Difficulty::Easy);
    let chart = generate_from_song(&song, &mut StdRng::seed_from_u64(1));
    assert!(!chart.is_empty());
    for note in chart.notes() {
        // beat 8 at 0.5s per beat
        let since_lead_in = note.time - 4.0;
        assert!(since_lead_in >= 0.0);
        assert_eq!(since_lead_in.fract(), 0.0, "note at {}", note.time);
    }
}

#[test]
fn test_silent_buffer_respects_medium_gap() {
    let samples = vec![0.0f32; 44100 * 10];
    let chart =
        generate_from_audio(&samples, 44100, 120.0, Difficulty::Medium, &mut StdRng::seed_from_u64(1))
            .unwrap();
    assert_well_formed(&chart);
    for pair in chart.notes().windows(2) {
        assert!(pair[1].time - pair[0].time >= 0.35);
    }
}

#[test]
fn test_quiet_buffer_only_places_failsafe_notes() {
    // Below the floored average but above the failsafe threshold.
    let samples = vec![0.005f32; 44100 * 10];
    let chart =
        generate_from_audio(&samples, 44100, 120.0, Difficulty::Medium, &mut StdRng::seed_from_u64(1))
            .unwrap();
    let times: Vec<f64> = chart.notes().iter().map(|n| n.time).collect();
    // 4 beats at 120 BPM is 2s; the first candidate past that is 2.25.
    assert_eq!(times, vec![2.25, 4.5, 6.75]);
}

#[test]
fn test_hard_gap_is_shorter() {
    let samples: Vec<f32> = (0..44100 * 10)
        .map(|i| ((i as f32) * 0.05).sin() * if (i / 4410) % 2 == 0 { 0.9 } else { 0.2 })
        .collect();
    let chart =
        generate_from_audio(&samples, 44100, 140.0, Difficulty::Hard, &mut StdRng::seed_from_u64(8))
            .unwrap();
    assert_well_formed(&chart);
    for pair in chart.notes().windows(2) {
        let gap = pair[1].time - pair[0].time;
        assert!(gap == 0.0 || gap >= 0.15, "gap {gap}");
    }
}

proptest! {
    #[test]
    fn prop_rule_based_charts_are_well_formed(
        bpm in 40.0f64..300.0,
        duration in 0.0f64..400.0,
        diff in 0usize..3,
        seed in any::<u64>(),
    ) {
        let song = Song::new("p", "P", "P", bpm, duration, difficulty(diff));
        let chart = generate_from_song(&song, &mut StdRng::seed_from_u64(seed));
        assert_well_formed(&chart);
        prop_assert!(chart.last_time() <= duration);
    }

    #[test]
    fn prop_analysis_charts_are_well_formed(
        samples in prop::collection::vec(-1.0f32..1.0, 0..20_000),
        bpm in 40.0f64..300.0,
        diff in 0usize..3,
        seed in any::<u64>(),
    ) {
        let chart = generate_from_audio(&samples, 2000, bpm, difficulty(diff), &mut StdRng::seed_from_u64(seed))
            .unwrap();
        assert_well_formed(&chart);
        let duration = samples.len() as f64 / 2000.0;
        for note in chart.notes() {
            prop_assert!(note.time >= 2.0);
            prop_assert!(note.time < duration - 1.0);
        }
    }
}
