use rand::Rng;
use std::time::{Duration, Instant};
use tracing::trace;

use crate::constants::PROGRESS_TICK;
use crate::timer::Interval;

/// Advances the current slide on a schedule and tracks progress for the bar.
///
/// The timer only runs while playing with at least one slide. Every manual
/// navigation restarts it, and any change of the slide set or duration goes
/// back to the first slide.
pub struct SlideRotation {
    len: usize,
    index: usize,
    playing: bool,
    shuffle: bool,
    duration: Duration,
    started_at: Option<Instant>,
    progress: f32,
    tick: Interval,
}

impl SlideRotation {
    pub fn new(len: usize, duration: Duration, shuffle: bool, now: Instant) -> Self {
        let mut rotation = Self {
            len,
            index: 0,
            playing: true,
            shuffle,
            duration,
            started_at: None,
            progress: 0.0,
            tick: Interval::new(PROGRESS_TICK, now),
        };
        rotation.restart(now);
        rotation
    }

    /// New slide set or duration: back to the first slide with a fresh timer.
    pub fn reconfigure(&mut self, len: usize, duration: Duration, shuffle: bool, now: Instant) {
        self.len = len;
        self.duration = duration;
        self.shuffle = shuffle;
        self.index = 0;
        self.restart(now);
    }

    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.shuffle = shuffle;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_shuffle(&self) -> bool {
        self.shuffle
    }

    /// Elapsed fraction of the current slide, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Samples the timer on the progress tick. Returns true when the slide changed.
    pub fn update<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> bool {
        let Some(started_at) = self.started_at else {
            return false;
        };
        if !self.tick.due(now) {
            return false;
        }

        let elapsed = now.saturating_duration_since(started_at);
        self.progress = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);

        if elapsed >= self.duration {
            trace!("Slide {} finished after {:?}", self.index, elapsed);
            self.next(now, rng);
            return true;
        }
        false
    }

    pub fn next<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) {
        if self.len == 0 {
            return;
        }
        if self.shuffle && self.len > 1 {
            // Any slide but the current one
            let mut candidate = rng.random_range(0..self.len);
            while candidate == self.index {
                candidate = rng.random_range(0..self.len);
            }
            self.index = candidate;
        } else {
            self.index = (self.index + 1) % self.len;
        }
        self.restart(now);
    }

    /// Under shuffle this may land on the current slide again.
    pub fn previous<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) {
        if self.len == 0 {
            return;
        }
        if self.shuffle && self.len > 1 {
            self.index = rng.random_range(0..self.len);
        } else {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.restart(now);
    }

    /// Shows a specific slide and pauses so the viewer can read it.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        self.playing = false;
        self.restart_stopped();
        true
    }

    pub fn toggle_play(&mut self, now: Instant) {
        self.set_playing(!self.playing, now);
    }

    pub fn set_playing(&mut self, playing: bool, now: Instant) {
        self.playing = playing;
        self.restart(now);
    }

    fn restart(&mut self, now: Instant) {
        self.progress = 0.0;
        if self.playing && self.len > 0 {
            self.started_at = Some(now);
            self.tick.reset(now);
        } else {
            self.started_at = None;
        }
    }

    fn restart_stopped(&mut self) {
        self.progress = 0.0;
        self.started_at = None;
    }
}
