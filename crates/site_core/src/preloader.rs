//! Preload sequence shown while the page is `Loading`.

use std::time::Duration;

use crate::{bootstrap::CompletionCallback, effects::Ease};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreloadTimeline {
    pub intro: Duration,
    /// Offset of the progress phase from the start of the sequence.
    pub progress_start: Duration,
    pub progress: Duration,
    pub fade_out: Duration,
}

impl Default for PreloadTimeline {
    fn default() -> Self {
        Self {
            intro: Duration::from_millis(1000),
            progress_start: Duration::from_millis(500),
            progress: Duration::from_millis(2500),
            fade_out: Duration::from_millis(1000),
        }
    }
}

impl PreloadTimeline {
    pub fn progress_end(&self) -> Duration {
        self.progress_start + self.progress
    }

    pub fn total(&self) -> Duration {
        self.progress_end().max(self.intro) + self.fade_out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloadPhase {
    Intro,
    Progress,
    FadeOut,
    Finished,
}

/// What the preload view draws for one instant of the sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreloadFrame {
    pub phase: PreloadPhase,
    pub percent: u8,
    pub bar_fraction: f32,
    pub title_opacity: f32,
    pub title_offset: f32,
    pub overlay_opacity: f32,
    pub overlay_scale: f32,
}

fn fraction(elapsed: Duration, start: Duration, length: Duration) -> f32 {
    let Some(active) = elapsed.checked_sub(start) else {
        return 0.0;
    };
    if length.is_zero() {
        return 1.0;
    }
    (active.as_secs_f32() / length.as_secs_f32()).min(1.0)
}

pub fn frame_at(timeline: &PreloadTimeline, elapsed: Duration) -> PreloadFrame {
    let intro = Ease::Power2Out.apply(fraction(elapsed, Duration::ZERO, timeline.intro));
    let progress = fraction(elapsed, timeline.progress_start, timeline.progress);
    let fade_start = timeline.total() - timeline.fade_out;
    let fade = Ease::Power2InOut.apply(fraction(elapsed, fade_start, timeline.fade_out));

    let phase = if elapsed >= timeline.total() {
        PreloadPhase::Finished
    } else if elapsed >= fade_start {
        PreloadPhase::FadeOut
    } else if elapsed >= timeline.progress_start {
        PreloadPhase::Progress
    } else {
        PreloadPhase::Intro
    };

    PreloadFrame {
        phase,
        percent: (progress * 100.0).round() as u8,
        bar_fraction: Ease::Power2Out.apply(progress),
        title_opacity: intro,
        title_offset: 50.0 * (1.0 - intro),
        overlay_opacity: 1.0 - fade,
        overlay_scale: 1.0 - 0.1 * fade,
    }
}

/// Drives the preload view and signals completion once it finishes.
#[derive(Debug)]
pub struct PreloadSequence {
    timeline: PreloadTimeline,
    on_complete: CompletionCallback,
    signalled: bool,
}

impl PreloadSequence {
    pub fn new(timeline: PreloadTimeline, on_complete: CompletionCallback) -> Self {
        Self {
            timeline,
            on_complete,
            signalled: false,
        }
    }

    pub fn timeline(&self) -> &PreloadTimeline {
        &self.timeline
    }

    pub fn advance(&mut self, elapsed: Duration) -> PreloadFrame {
        let frame = frame_at(&self.timeline, elapsed);
        if frame.phase == PreloadPhase::Finished && !self.signalled {
            self.signalled = true;
            self.on_complete.complete();
        }
        frame
    }

    pub fn has_signalled(&self) -> bool {
        self.signalled
    }
}

#[cfg(test)]
#[path = "tests/preloader_tests.rs"]
mod tests;
