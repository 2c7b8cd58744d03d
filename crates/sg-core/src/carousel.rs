//! Cyclic index over a fixed-length list
//!
//! Buttons and arrow keys drive the same transitions, so the modal, the
//! hero slider and the testimonial slider all share this type.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// `(i + 1) mod n`; no-op on an empty list
    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    /// `(i - 1 + n) mod n`; no-op on an empty list
    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    /// Jump to `index`, returning false if it is out of range
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    pub fn first(&mut self) -> usize {
        self.index = 0;
        self.index
    }

    pub fn last(&mut self) -> usize {
        self.index = self.len.saturating_sub(1);
        self.index
    }

    /// Replace the underlying list; the index always restarts at 0
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.index = 0;
    }

    pub fn handle_key(&mut self, key: NavKey) -> KeyOutcome {
        match key {
            NavKey::ArrowRight if self.len > 0 => KeyOutcome::Moved(self.next()),
            NavKey::ArrowLeft if self.len > 0 => KeyOutcome::Moved(self.prev()),
            NavKey::Home if self.len > 0 => KeyOutcome::Moved(self.first()),
            NavKey::End if self.len > 0 => KeyOutcome::Moved(self.last()),
            NavKey::Escape => KeyOutcome::Close,
            _ => KeyOutcome::Ignored,
        }
    }
}

/// Keys the carousel reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Escape,
    Home,
    End,
    Other,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Self {
        match key {
            "ArrowLeft" | "Left" => NavKey::ArrowLeft,
            "ArrowRight" | "Right" => NavKey::ArrowRight,
            "Escape" | "Esc" => NavKey::Escape,
            "Home" => NavKey::Home,
            "End" => NavKey::End,
            _ => NavKey::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Moved(usize),
    Close,
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        let mut c = Carousel::new(3);
        assert_eq!(c.next(), 1);
        assert_eq!(c.next(), 2);
        assert_eq!(c.next(), 0);
    }

    #[test]
    fn test_prev_wraps() {
        let mut c = Carousel::new(3);
        assert_eq!(c.prev(), 2);
        assert_eq!(c.prev(), 1);
        assert_eq!(c.prev(), 0);
    }

    #[test]
    fn test_next_prev_formulas() {
        for n in 1..6 {
            for i in 0..n {
                let mut c = Carousel::new(n);
                c.go_to(i);
                assert_eq!(c.next(), (i + 1) % n);
                c.go_to(i);
                assert_eq!(c.prev(), (i + n - 1) % n);
            }
        }
    }

    #[test]
    fn test_empty_is_noop() {
        let mut c = Carousel::new(0);
        assert_eq!(c.next(), 0);
        assert_eq!(c.prev(), 0);
        assert!(!c.go_to(0));
        assert_eq!(c.handle_key(NavKey::ArrowRight), KeyOutcome::Ignored);
        assert_eq!(c.handle_key(NavKey::End), KeyOutcome::Ignored);
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut c = Carousel::new(1);
        assert_eq!(c.next(), 0);
        assert_eq!(c.prev(), 0);
    }

    #[test]
    fn test_go_to_out_of_range() {
        let mut c = Carousel::new(2);
        assert!(c.go_to(1));
        assert!(!c.go_to(2));
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_reset_restarts_at_zero() {
        let mut c = Carousel::new(4);
        c.go_to(3);
        c.reset(2);
        assert_eq!(c.index(), 0);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_keys_match_buttons() {
        let mut keyed = Carousel::new(4);
        let mut clicked = Carousel::new(4);
        assert_eq!(keyed.handle_key(NavKey::ArrowLeft), KeyOutcome::Moved(clicked.prev()));
        assert_eq!(keyed.handle_key(NavKey::ArrowRight), KeyOutcome::Moved(clicked.next()));
        assert_eq!(keyed.handle_key(NavKey::End), KeyOutcome::Moved(3));
        assert_eq!(keyed.handle_key(NavKey::Home), KeyOutcome::Moved(0));
        assert_eq!(keyed.handle_key(NavKey::Escape), KeyOutcome::Close);
        assert_eq!(keyed.handle_key(NavKey::Other), KeyOutcome::Ignored);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(NavKey::from_key("ArrowLeft"), NavKey::ArrowLeft);
        assert_eq!(NavKey::from_key("Esc"), NavKey::Escape);
        assert_eq!(NavKey::from_key("a"), NavKey::Other);
    }
}
