use std::time::Duration;

use gloo_timers::callback::{Interval, Timeout};
use yew::Callback;

/// Arms timers that deliver `E` back to their owner.
///
/// A handle keeps its timer alive; dropping it cancels the timer before it fires again.
pub trait Scheduler<E: Copy + 'static> {
    type Handle;

    /// Fire `event` every `every`, starting one period from now.
    fn repeat(&self, every: Duration, event: E) -> Self::Handle;

    /// Fire `event` once after `after`.
    fn once(&self, after: Duration, event: E) -> Self::Handle;
}

fn to_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

/// Browser timers via `setInterval`/`setTimeout`.
pub struct GlooScheduler<E: 'static> {
    on_event: Callback<E>,
}

impl<E: 'static> GlooScheduler<E> {
    pub fn new(on_event: Callback<E>) -> Self {
        Self { on_event }
    }
}

/// Held only for its `Drop`, which clears the browser timer.
#[allow(dead_code)]
pub enum TimerHandle {
    Interval(Interval),
    Timeout(Timeout),
}

impl<E: Copy + 'static> Scheduler<E> for GlooScheduler<E> {
    type Handle = TimerHandle;

    fn repeat(&self, every: Duration, event: E) -> TimerHandle {
        let on_event = self.on_event.clone();
        TimerHandle::Interval(Interval::new(to_millis(every), move || on_event.emit(event)))
    }

    fn once(&self, after: Duration, event: E) -> TimerHandle {
        let on_event = self.on_event.clone();
        TimerHandle::Timeout(Timeout::new(to_millis(after), move || on_event.emit(event)))
    }
}
