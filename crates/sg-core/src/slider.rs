//! Auto-advancing slider state and timer ownership
//!
//! The slider is driven by ticks of a fixed-interval timer rather than a
//! clock, so the same state runs in the browser and in tests. User
//! navigation pauses auto-play for `resume_after`, which is consumed one
//! interval per tick.

use std::time::Duration;

use crate::carousel::Carousel;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);
pub const DEFAULT_RESUME_AFTER: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoPlay {
    carousel: Carousel,
    interval: Duration,
    resume_after: Duration,
    cooldown: Duration,
    hovered: bool,
    enabled: bool,
}

impl AutoPlay {
    pub fn new(len: usize) -> Self {
        Self::with_timing(len, DEFAULT_INTERVAL, DEFAULT_RESUME_AFTER)
    }

    pub fn with_timing(len: usize, interval: Duration, resume_after: Duration) -> Self {
        Self {
            carousel: Carousel::new(len),
            interval,
            resume_after,
            cooldown: Duration::ZERO,
            hovered: false,
            enabled: len > 1,
        }
    }

    pub fn index(&self) -> usize {
        self.carousel.index()
    }

    pub fn len(&self) -> usize {
        self.carousel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carousel.is_empty()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True when the next tick would advance
    pub fn is_playing(&self) -> bool {
        self.enabled && !self.hovered && self.cooldown.is_zero()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled && self.carousel.len() > 1;
    }

    /// Pointer over the slider holds it on the current item
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// One timer interval elapsed. Returns true if the slider advanced.
    pub fn tick(&mut self) -> bool {
        if !self.cooldown.is_zero() {
            self.cooldown = self.cooldown.saturating_sub(self.interval);
            return false;
        }
        if !self.is_playing() {
            return false;
        }
        self.carousel.next();
        true
    }

    pub fn next(&mut self) -> usize {
        self.pause();
        self.carousel.next()
    }

    pub fn prev(&mut self) -> usize {
        self.pause();
        self.carousel.prev()
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        self.pause();
        self.carousel.go_to(index)
    }

    /// Replace the slide list, restarting at the first slide
    pub fn reset(&mut self, len: usize) {
        self.carousel.reset(len);
        self.cooldown = Duration::ZERO;
        self.enabled = len > 1;
    }

    fn pause(&mut self) {
        self.cooldown = self.resume_after;
    }
}

/// A running timer that can be stopped
pub trait CancelTimer {
    fn cancel(&mut self);
}

/// Owns a timer handle and cancels it exactly once: on an explicit
/// [`TimerGuard::cancel`] or, failing that, on drop.
#[derive(Debug)]
pub struct TimerGuard<H: CancelTimer> {
    handle: Option<H>,
}

impl<H: CancelTimer> TimerGuard<H> {
    pub fn new(handle: H) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.cancel();
            tracing::trace!("slider timer cancelled");
        }
    }
}

impl<H: CancelTimer> Drop for TimerGuard<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingTimer(Rc<Cell<u32>>);

    impl CancelTimer for CountingTimer {
        fn cancel(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_ticks_advance_and_wrap() {
        let mut slider = AutoPlay::new(3);
        assert!(slider.tick());
        assert!(slider.tick());
        assert_eq!(slider.index(), 2);
        assert!(slider.tick());
        assert_eq!(slider.index(), 0);
    }

    #[test]
    fn test_user_navigation_pauses_then_resumes() {
        let mut slider =
            AutoPlay::with_timing(4, Duration::from_secs(5), Duration::from_secs(10));
        assert_eq!(slider.next(), 1);
        assert!(!slider.is_playing());

        assert!(!slider.tick());
        assert!(!slider.tick());
        assert_eq!(slider.index(), 1);

        assert!(slider.is_playing());
        assert!(slider.tick());
        assert_eq!(slider.index(), 2);
    }

    #[test]
    fn test_cooldown_rounds_up_to_whole_ticks() {
        let mut slider =
            AutoPlay::with_timing(3, Duration::from_secs(4), Duration::from_secs(5));
        slider.prev();
        assert!(!slider.tick());
        assert!(!slider.tick());
        assert!(slider.tick());
    }

    #[test]
    fn test_hover_holds_slide() {
        let mut slider = AutoPlay::new(3);
        slider.set_hovered(true);
        assert!(!slider.tick());
        assert_eq!(slider.index(), 0);
        slider.set_hovered(false);
        assert!(slider.tick());
    }

    #[test]
    fn test_single_slide_never_autoplays() {
        let mut slider = AutoPlay::new(1);
        assert!(!slider.is_playing());
        assert!(!slider.tick());
        slider.set_enabled(true);
        assert!(!slider.tick());
    }

    #[test]
    fn test_disabled_slider_holds_until_reenabled() {
        let mut slider = AutoPlay::new(3);
        slider.set_enabled(false);
        assert!(!slider.is_playing());
        assert!(!slider.tick());
        assert_eq!(slider.next(), 1);

        slider.set_enabled(true);
        slider.tick();
        slider.tick();
        assert!(slider.is_playing());
    }

    #[test]
    fn test_empty_slider() {
        let mut slider = AutoPlay::new(0);
        assert!(!slider.tick());
        assert_eq!(slider.next(), 0);
        assert!(!slider.go_to(0));
    }

    #[test]
    fn test_reset_restarts() {
        let mut slider = AutoPlay::new(3);
        slider.go_to(2);
        slider.reset(5);
        assert_eq!(slider.index(), 0);
        assert!(slider.is_playing());
    }

    #[test]
    fn test_timer_cancelled_once_on_explicit_cancel() {
        let count = Rc::new(Cell::new(0));
        let mut guard = TimerGuard::new(CountingTimer(count.clone()));
        assert!(guard.is_active());
        guard.cancel();
        guard.cancel();
        assert!(!guard.is_active());
        drop(guard);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_timer_cancelled_on_drop() {
        let count = Rc::new(Cell::new(0));
        {
            let _guard = TimerGuard::new(CountingTimer(count.clone()));
        }
        assert_eq!(count.get(), 1);
    }
}
