//! Frame-strip animation component

use crate::ecs::Component;

/// Cycles through the frames of a sprite strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    frame_count: u32,
    frame_duration: i32,
    elapsed: i32,
    current_frame: u32,
    looping: bool,
    finished: bool,
}

impl Component for Animation {}

impl Animation {
    /// Animation over `frame_count` frames, each shown for `frame_duration` ms
    ///
    /// A zero frame count or non-positive duration gives a still frame.
    pub fn new(frame_count: u32, frame_duration: i32, looping: bool) -> Self {
        Self {
            frame_count: frame_count.max(1),
            frame_duration: frame_duration.max(0),
            elapsed: 0,
            current_frame: 0,
            looping,
            finished: false,
        }
    }

    /// Frame currently shown
    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    /// Whether a non-looping animation has reached its last frame
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Restart from the first frame
    pub fn reset(&mut self) {
        self.elapsed = 0;
        self.current_frame = 0;
        self.finished = false;
    }

    /// Advance by `delta` milliseconds
    pub fn advance(&mut self, delta: i32) {
        if self.finished || self.frame_duration == 0 || self.frame_count == 1 || delta <= 0 {
            return;
        }

        // Widened so a saturated frame delta cannot overflow the accumulator
        let total = i64::from(self.elapsed) + i64::from(delta);
        let duration = i64::from(self.frame_duration);
        let steps = (total / duration) as u64;
        self.elapsed = (total % duration) as i32;

        let target = u64::from(self.current_frame) + steps;
        if self.looping {
            self.current_frame = (target % u64::from(self.frame_count)) as u32;
        } else if target >= u64::from(self.frame_count - 1) {
            self.current_frame = self.frame_count - 1;
            self.finished = true;
        } else {
            self.current_frame = target as u32;
        }
    }
}
