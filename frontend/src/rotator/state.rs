use std::time::Duration;

use thiserror::Error;

use super::scheduler::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatorTiming {
    /// Time between automatic advances.
    pub interval: Duration,
    /// How long automatic advancing stays off after a manual navigation.
    pub cooldown: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotatorEvent {
    Tick,
    CooldownElapsed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotatorError {
    #[error("invalid rotator config: {0}")]
    InvalidConfig(&'static str),
    #[error("index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Cycles through a fixed list of items on a timer.
///
/// Manual navigation pauses the automatic advance for `cooldown`; repeated navigation
/// keeps pushing the resume point out. Both timers live on the rotator itself, so
/// disposing or dropping it cancels them.
pub struct Rotator<T, S: Scheduler<RotatorEvent>> {
    items: Vec<T>,
    current: usize,
    auto_play: bool,
    timing: RotatorTiming,
    scheduler: S,
    tick_timer: Option<S::Handle>,
    cooldown_timer: Option<S::Handle>,
}

impl<T, S: Scheduler<RotatorEvent>> Rotator<T, S> {
    pub fn new(items: Vec<T>, timing: RotatorTiming, scheduler: S) -> Result<Self, RotatorError> {
        if items.is_empty() {
            return Err(RotatorError::InvalidConfig("no items to rotate"));
        }
        if timing.interval.is_zero() {
            return Err(RotatorError::InvalidConfig("interval must be non-zero"));
        }

        let mut rotator = Self {
            items,
            current: 0,
            auto_play: true,
            timing,
            scheduler,
            tick_timer: None,
            cooldown_timer: None,
        };
        rotator.restart_ticking();
        log::debug!("Rotator started with {} items", rotator.items.len());
        Ok(rotator)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn auto_play(&self) -> bool {
        self.auto_play
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn current(&self) -> &T {
        &self.items[self.current]
    }

    #[cfg(test)]
    pub fn cooldown_pending(&self) -> bool {
        self.cooldown_timer.is_some()
    }

    pub fn next(&mut self) {
        self.step_forward();
        self.manual_interaction();
    }

    pub fn previous(&mut self) {
        let len = self.items.len();
        self.current = (self.current + len - 1) % len;
        self.manual_interaction();
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), RotatorError> {
        if index >= self.items.len() {
            return Err(RotatorError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.current = index;
        self.manual_interaction();
        Ok(())
    }

    /// Explicit play/pause. Arms no cooldown and leaves a pending one in place.
    pub fn toggle_auto_play(&mut self) {
        self.auto_play = !self.auto_play;
    }

    /// One automatic advance. Ignored while auto-play is off.
    pub fn tick(&mut self) {
        if self.auto_play {
            self.step_forward();
        }
    }

    pub fn handle(&mut self, event: RotatorEvent) {
        match event {
            RotatorEvent::Tick => self.tick(),
            RotatorEvent::CooldownElapsed => {
                self.cooldown_timer = None;
                self.auto_play = true;
            }
        }
    }

    pub fn dispose(mut self) {
        self.cancel_timers();
        log::debug!("Rotator disposed");
    }

    fn step_forward(&mut self) {
        self.current = (self.current + 1) % self.items.len();
    }

    fn manual_interaction(&mut self) {
        self.auto_play = false;
        // Old handle drops first, so at most one cooldown is ever pending.
        self.cooldown_timer = None;
        self.cooldown_timer = Some(
            self.scheduler
                .once(self.timing.cooldown, RotatorEvent::CooldownElapsed),
        );
        self.restart_ticking();
    }

    fn restart_ticking(&mut self) {
        self.tick_timer = None;
        self.tick_timer = Some(self.scheduler.repeat(self.timing.interval, RotatorEvent::Tick));
    }

    fn cancel_timers(&mut self) {
        self.tick_timer = None;
        self.cooldown_timer = None;
    }
}

impl<T, S: Scheduler<RotatorEvent>> Drop for Rotator<T, S> {
    fn drop(&mut self) {
        self.cancel_timers();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotator::scheduler::manual::ManualScheduler;

    const TIMING: RotatorTiming = RotatorTiming {
        interval: Duration::from_millis(5_000),
        cooldown: Duration::from_millis(10_000),
    };

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn fixture(len: usize) -> (Rotator<usize, ManualScheduler<RotatorEvent>>, ManualScheduler<RotatorEvent>) {
        let scheduler = ManualScheduler::new();
        let rotator = Rotator::new((0..len).collect(), TIMING, scheduler.clone()).unwrap();
        (rotator, scheduler)
    }

    /// Feeds every timer due up to `t` milliseconds into the rotator.
    fn run_until(
        rotator: &mut Rotator<usize, ManualScheduler<RotatorEvent>>,
        scheduler: &ManualScheduler<RotatorEvent>,
        t: u64,
    ) {
        while let Some(event) = scheduler.pop_due(ms(t)) {
            rotator.handle(event);
        }
    }

    #[test]
    fn starts_at_first_item_playing() {
        for len in 1..=5 {
            let (rotator, _) = fixture(len);
            assert_eq!(rotator.current_index(), 0);
            assert!(rotator.auto_play());
            assert_eq!(rotator.len(), len);
        }
    }

    #[test]
    fn rejects_empty_items() {
        let result = Rotator::<u8, _>::new(Vec::new(), TIMING, ManualScheduler::new());
        assert!(matches!(result, Err(RotatorError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_zero_interval() {
        let timing = RotatorTiming { interval: Duration::ZERO, ..TIMING };
        let result = Rotator::new(vec![1], timing, ManualScheduler::new());
        assert!(matches!(result, Err(RotatorError::InvalidConfig(_))));
    }

    #[test]
    fn next_and_previous_wrap_and_invert() {
        let (mut rotator, _) = fixture(3);
        rotator.next();
        assert_eq!(rotator.current_index(), 1);
        rotator.previous();
        assert_eq!(rotator.current_index(), 0);
        rotator.previous();
        assert_eq!(rotator.current_index(), 2);
        rotator.next();
        assert_eq!(rotator.current_index(), 0);
    }

    #[test]
    fn next_then_previous_restores_every_index() {
        for len in 1..=5 {
            for start in 0..len {
                let (mut rotator, _) = rotator_at(len, start);
                rotator.next();
                rotator.previous();
                assert_eq!(rotator.current_index(), start, "len {} start {}", len, start);

                rotator.previous();
                rotator.next();
                assert_eq!(rotator.current_index(), start, "len {} start {}", len, start);
            }
        }
    }

    #[test]
    fn single_item_stays_put() {
        let (mut rotator, _) = fixture(1);
        rotator.next();
        rotator.previous();
        rotator.tick();
        assert_eq!(rotator.current_index(), 0);
        assert_eq!(*rotator.current(), 0);
    }

    #[test]
    fn go_to_valid_and_invalid() {
        let (mut rotator, _) = fixture(4);
        for k in 0..4 {
            rotator.go_to(k).unwrap();
            assert_eq!(rotator.current_index(), k);
        }

        let (mut fresh, _) = rotator_at(4, 2);
        assert_eq!(
            fresh.go_to(4),
            Err(RotatorError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(fresh.current_index(), 2);
        assert!(fresh.auto_play());
        assert!(!fresh.cooldown_pending());
    }

    fn rotator_at(
        len: usize,
        index: usize,
    ) -> (Rotator<usize, ManualScheduler<RotatorEvent>>, ManualScheduler<RotatorEvent>) {
        let (mut rotator, scheduler) = fixture(len);
        while rotator.current_index() != index {
            rotator.tick();
        }
        (rotator, scheduler)
    }

    #[test]
    fn manual_navigation_pauses_until_cooldown() {
        let (mut rotator, scheduler) = fixture(3);
        rotator.next();
        assert!(!rotator.auto_play());
        assert!(rotator.cooldown_pending());

        run_until(&mut rotator, &scheduler, 9_999);
        assert!(!rotator.auto_play());
        run_until(&mut rotator, &scheduler, 10_000);
        assert!(rotator.auto_play());
        assert!(!rotator.cooldown_pending());
    }

    #[test]
    fn repeated_navigation_rearms_the_cooldown() {
        let (mut rotator, scheduler) = fixture(3);
        rotator.next();
        run_until(&mut rotator, &scheduler, 5_000);
        rotator.next();

        run_until(&mut rotator, &scheduler, 10_000);
        assert!(!rotator.auto_play(), "first cooldown must not resume playback");
        run_until(&mut rotator, &scheduler, 14_999);
        assert!(!rotator.auto_play());
        run_until(&mut rotator, &scheduler, 15_000);
        assert!(rotator.auto_play());
    }

    #[test]
    fn tick_respects_auto_play() {
        let (mut rotator, _) = fixture(3);
        rotator.tick();
        assert_eq!(rotator.current_index(), 1);
        assert!(rotator.auto_play());
        assert!(!rotator.cooldown_pending());

        rotator.toggle_auto_play();
        rotator.tick();
        assert_eq!(rotator.current_index(), 1);
    }

    #[test]
    fn toggle_flips_without_moving_or_cooldown() {
        let (mut rotator, _) = fixture(3);
        rotator.toggle_auto_play();
        assert!(!rotator.auto_play());
        assert_eq!(rotator.current_index(), 0);
        assert!(!rotator.cooldown_pending());
        rotator.toggle_auto_play();
        assert!(rotator.auto_play());
    }

    #[test]
    fn pending_cooldown_outlives_a_pause() {
        let (mut rotator, scheduler) = fixture(3);
        rotator.next();
        rotator.toggle_auto_play();
        assert!(rotator.auto_play());
        rotator.toggle_auto_play();
        assert!(!rotator.auto_play());
        assert!(rotator.cooldown_pending());

        run_until(&mut rotator, &scheduler, 9_999);
        assert!(!rotator.auto_play());
        run_until(&mut rotator, &scheduler, 10_000);
        assert!(rotator.auto_play());
        assert!(!rotator.cooldown_pending());
    }

    #[test]
    fn one_tick_timer_and_at_most_one_cooldown() {
        let (mut rotator, scheduler) = fixture(3);
        assert_eq!(scheduler.pending(), 1);
        rotator.next();
        rotator.previous();
        rotator.go_to(2).unwrap();
        assert_eq!(scheduler.pending(), 2);
        run_until(&mut rotator, &scheduler, 10_000);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn dispose_cancels_everything() {
        let (mut rotator, scheduler) = fixture(3);
        rotator.next();
        assert_eq!(scheduler.pending(), 2);
        rotator.dispose();
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn drop_cancels_everything() {
        let (mut rotator, scheduler) = fixture(3);
        rotator.previous();
        drop(rotator);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn timeline_with_interaction() {
        let (mut rotator, scheduler) = fixture(3);

        run_until(&mut rotator, &scheduler, 5_000);
        assert_eq!(rotator.current_index(), 1);

        run_until(&mut rotator, &scheduler, 6_000);
        rotator.previous();
        assert_eq!(rotator.current_index(), 0);
        assert!(!rotator.auto_play());

        // Tick at 11s is swallowed: cooldown runs until 16s.
        run_until(&mut rotator, &scheduler, 11_000);
        assert_eq!(rotator.current_index(), 0);
        assert!(!rotator.auto_play());

        // Cooldown and tick share the 16s deadline; the cooldown was armed first.
        run_until(&mut rotator, &scheduler, 16_000);
        assert!(rotator.auto_play());
        assert_eq!(rotator.current_index(), 1);

        run_until(&mut rotator, &scheduler, 21_000);
        assert_eq!(rotator.current_index(), 2);
        run_until(&mut rotator, &scheduler, 26_000);
        assert_eq!(rotator.current_index(), 0);
    }
}
