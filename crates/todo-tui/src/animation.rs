//! Fade-out transitions for tasks being removed.
//!
//! Timing is kept here, outside the store. The app starts a [`FadeOut`] when
//! removal begins and commits the removal once [`FadeTracker::take_finished`]
//! reports the fade as done. Every method takes `now` explicitly so tests can
//! drive time by hand.

use std::time::{Duration, Instant};
use todo_domain::TaskId;

#[derive(Debug, Clone)]
pub struct FadeOut {
    pub task_id: TaskId,
    started_at: Instant,
    duration: Duration,
}

impl FadeOut {
    pub fn new(task_id: TaskId, started_at: Instant, duration: Duration) -> Self {
        Self {
            task_id,
            started_at,
            duration,
        }
    }

    /// Fraction of the fade elapsed, in `0.0..=1.0`.
    pub fn progress_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn opacity_at(&self, now: Instant) -> f32 {
        1.0 - self.progress_at(now)
    }

    pub fn is_finished_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}

#[derive(Debug, Clone)]
pub struct FadeTracker {
    fades: Vec<FadeOut>,
    duration: Duration,
}

impl FadeTracker {
    pub fn new(duration: Duration) -> Self {
        Self {
            fades: Vec::new(),
            duration,
        }
    }

    /// Starts fading a task. A task that is already fading keeps its
    /// original start time.
    pub fn start(&mut self, task_id: TaskId, now: Instant) -> bool {
        if self.is_fading(task_id) {
            return false;
        }
        self.fades.push(FadeOut::new(task_id, now, self.duration));
        true
    }

    pub fn is_fading(&self, task_id: TaskId) -> bool {
        self.fades.iter().any(|f| f.task_id == task_id)
    }

    pub fn opacity(&self, task_id: TaskId, now: Instant) -> Option<f32> {
        self.fades
            .iter()
            .find(|f| f.task_id == task_id)
            .map(|f| f.opacity_at(now))
    }

    /// Removes and returns the ids of every fade that has run its course,
    /// in the order the fades were started.
    pub fn take_finished(&mut self, now: Instant) -> Vec<TaskId> {
        let mut finished = Vec::new();
        self.fades.retain(|fade| {
            if fade.is_finished_at(now) {
                finished.push(fade.task_id);
                false
            } else {
                true
            }
        });
        finished
    }

    pub fn len(&self) -> usize {
        self.fades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fades.is_empty()
    }
}
