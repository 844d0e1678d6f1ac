use super::*;
use crate::bootstrap::BootstrapController;
use shared::domain::LoadState;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn default_timeline_runs_four_seconds() {
    let timeline = PreloadTimeline::default();
    assert_eq!(timeline.progress_end(), ms(3000));
    assert_eq!(timeline.total(), ms(4000));
}

#[test]
fn phases_follow_the_timeline() {
    let timeline = PreloadTimeline::default();
    assert_eq!(frame_at(&timeline, ms(0)).phase, PreloadPhase::Intro);
    assert_eq!(frame_at(&timeline, ms(499)).phase, PreloadPhase::Intro);
    assert_eq!(frame_at(&timeline, ms(500)).phase, PreloadPhase::Progress);
    assert_eq!(frame_at(&timeline, ms(2999)).phase, PreloadPhase::Progress);
    assert_eq!(frame_at(&timeline, ms(3000)).phase, PreloadPhase::FadeOut);
    assert_eq!(frame_at(&timeline, ms(4000)).phase, PreloadPhase::Finished);
}

#[test]
fn percentage_counts_linear_progress() {
    let timeline = PreloadTimeline::default();
    assert_eq!(frame_at(&timeline, ms(0)).percent, 0);
    assert_eq!(frame_at(&timeline, ms(500)).percent, 0);
    assert_eq!(frame_at(&timeline, ms(1750)).percent, 50);
    assert_eq!(frame_at(&timeline, ms(3000)).percent, 100);
    assert_eq!(frame_at(&timeline, ms(9000)).percent, 100);
}

#[test]
fn overlay_fades_out_before_finishing() {
    let timeline = PreloadTimeline::default();
    let before = frame_at(&timeline, ms(2900));
    let during = frame_at(&timeline, ms(3500));
    let after = frame_at(&timeline, ms(4000));

    assert_eq!(before.overlay_opacity, 1.0);
    assert!(during.overlay_opacity > 0.0 && during.overlay_opacity < 1.0);
    assert_eq!(after.overlay_opacity, 0.0);
    assert!((after.overlay_scale - 0.9).abs() < 1e-6);
}

#[test]
fn sequence_signals_completion_once_when_finished() {
    let controller = BootstrapController::default();
    let mut sequence =
        PreloadSequence::new(PreloadTimeline::default(), controller.completion_callback());

    sequence.advance(ms(1000));
    sequence.advance(ms(3999));
    assert_eq!(controller.state(), LoadState::Loading);
    assert!(!sequence.has_signalled());

    sequence.advance(ms(4000));
    assert!(sequence.has_signalled());
    assert_eq!(controller.state(), LoadState::Loaded);

    let frame = sequence.advance(ms(5000));
    assert_eq!(frame.phase, PreloadPhase::Finished);
    assert_eq!(controller.state(), LoadState::Loaded);
}

#[test]
fn zero_length_timeline_finishes_immediately() {
    let controller = BootstrapController::default();
    let timeline = PreloadTimeline {
        intro: Duration::ZERO,
        progress_start: Duration::ZERO,
        progress: Duration::ZERO,
        fade_out: Duration::ZERO,
    };
    let mut sequence = PreloadSequence::new(timeline, controller.completion_callback());

    let frame = sequence.advance(Duration::ZERO);
    assert_eq!(frame.phase, PreloadPhase::Finished);
    assert_eq!(frame.percent, 100);
    assert!(controller.is_loaded());
}
