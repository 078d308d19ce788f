//! Per-frame input snapshot handed to the simulation.
//!
//! The binary owns key polling; the core only sees which movement keys are
//! held and how many discrete events arrived since the last frame.

/// Cardinal movement keys currently held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Directions {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Directions {
    /// Sum of the held key vectors, screen coordinates (+y down).
    pub fn step(&self) -> (i32, i32) {
        let mut dx = 0;
        let mut dy = 0;
        if self.up {
            dy -= 1;
        }
        if self.down {
            dy += 1;
        }
        if self.left {
            dx -= 1;
        }
        if self.right {
            dx += 1;
        }
        (dx, dy)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub held: Directions,
    /// Fire-key presses since the previous frame; one beam each.
    pub shots: u32,
    pub activate_buff: bool,
    pub quit: bool,
}

impl FrameInput {
    /// No keys, no events.
    pub fn idle() -> Self {
        Self::default()
    }
}
