//! Navigation state machine for the slide index.

use tracing::debug;

use crate::input::NavCommand;

/// Current position within the deck. The index is always in `[0, slide_count)`
/// and wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: usize,
    slide_count: usize,
}

impl Navigator {
    pub fn new(slide_count: usize) -> Self {
        Self {
            current: 0,
            slide_count: slide_count.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.slide_count;
    }

    pub fn retreat(&mut self) {
        self.current = (self.current + self.slide_count - 1) % self.slide_count;
    }

    /// Out-of-range targets are clamped to the last slide instead of panicking.
    pub fn jump_to(&mut self, index: usize) {
        self.current = index.min(self.slide_count - 1);
    }

    /// Single transition entry point shared by every input source.
    pub fn apply(&mut self, command: NavCommand) {
        let from = self.current;
        match command {
            NavCommand::Next => self.advance(),
            NavCommand::Prev => self.retreat(),
            NavCommand::JumpTo(index) => self.jump_to(index),
        }
        debug!("navigate: {:?} slide {} -> {}", command, from, self.current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_stays_in_bounds_for_any_command_sequence() {
        let script = [
            NavCommand::Next,
            NavCommand::Next,
            NavCommand::Prev,
            NavCommand::Next,
            NavCommand::Next,
            NavCommand::Next,
            NavCommand::Prev,
            NavCommand::Prev,
            NavCommand::Prev,
            NavCommand::Prev,
        ];
        for slide_count in 1..=6 {
            let mut nav = Navigator::new(slide_count);
            for &command in &script {
                nav.apply(command);
                assert!(nav.current() < slide_count);
            }
        }
    }

    #[test]
    fn retreat_is_the_inverse_of_advance() {
        for start in 0..5 {
            let mut nav = Navigator::new(5);
            nav.jump_to(start);

            nav.advance();
            nav.retreat();
            assert_eq!(nav.current(), start);

            nav.retreat();
            nav.advance();
            assert_eq!(nav.current(), start);
        }
    }

    #[test]
    fn advancing_slide_count_times_returns_to_the_start() {
        let mut nav = Navigator::new(7);
        nav.jump_to(3);
        for _ in 0..7 {
            nav.advance();
        }
        assert_eq!(nav.current(), 3);
    }

    #[test]
    fn jump_to_sets_the_exact_index_regardless_of_prior_state() {
        let mut nav = Navigator::new(4);
        nav.advance();
        nav.advance();
        for target in 0..4 {
            nav.jump_to(target);
            assert_eq!(nav.current(), target);
        }
    }

    #[test]
    fn jump_to_clamps_out_of_range_targets() {
        let mut nav = Navigator::new(3);
        nav.jump_to(99);
        assert_eq!(nav.current(), 2);
    }

    #[test]
    fn five_slide_deck_wraps_after_the_last_slide() {
        let mut nav = Navigator::new(5);
        for _ in 0..4 {
            nav.apply(NavCommand::Next);
        }
        assert_eq!(nav.current(), 4);
        nav.apply(NavCommand::Next);
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn single_slide_deck_never_moves() {
        let mut nav = Navigator::new(1);
        nav.advance();
        assert_eq!(nav.current(), 0);
        nav.retreat();
        assert_eq!(nav.current(), 0);
    }
}
