//! Input adapters: keyboard polling and the pointer swipe tracker.

use raylib::prelude::*;

use crate::constants::SWIPE_MIN_DISTANCE;

/// Logical navigation actions produced by every input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Prev,
    JumpTo(usize),
}

/// Right arrow and space advance, left arrow retreats.
pub fn keyboard_command(rl: &RaylibHandle) -> Option<NavCommand> {
    if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) || rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
        Some(NavCommand::Next)
    } else if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
        Some(NavCommand::Prev)
    } else {
        None
    }
}

/// Classifies a pointer press/release pair as a horizontal swipe.
///
/// raylib reports touch contacts through the same pointer position on every
/// backend, so this covers both mouse drags and touch swipes.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self { start_x: None }
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Ends the gesture. Returns a command only when the horizontal travel
    /// exceeds `SWIPE_MIN_DISTANCE`; a leftward drag advances, a rightward
    /// drag retreats.
    pub fn finish(&mut self, x: f32) -> Option<NavCommand> {
        let start = self.start_x.take()?;
        let delta = start - x;
        if delta.abs() <= SWIPE_MIN_DISTANCE {
            return None;
        }
        if delta > 0.0 {
            Some(NavCommand::Next)
        } else {
            Some(NavCommand::Prev)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipe_past_the_threshold_triggers_exactly_one_transition() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(200.0);
        assert_eq!(swipe.finish(149.0), Some(NavCommand::Next)); // 51 px leftward
        assert_eq!(swipe.finish(0.0), None); // gesture already consumed
    }

    #[test]
    fn sub_threshold_motion_is_not_a_swipe() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(200.0);
        assert_eq!(swipe.finish(151.0), None); // 49 px

        swipe.begin(200.0);
        assert_eq!(swipe.finish(250.0), None); // exactly 50 px is still not a swipe
    }

    #[test]
    fn rightward_swipe_goes_to_the_previous_slide() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(100.0);
        assert_eq!(swipe.finish(180.0), Some(NavCommand::Prev));
    }

    #[test]
    fn release_without_a_press_is_ignored() {
        let mut swipe = SwipeTracker::new();
        assert_eq!(swipe.finish(120.0), None);
    }
}
