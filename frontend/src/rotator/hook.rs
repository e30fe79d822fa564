use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use super::scheduler::{GlooScheduler, Scheduler};
use super::state::{Rotator, RotatorEvent, RotatorTiming};

type GlooRotator<T> = Rotator<T, GlooScheduler<RotatorEvent>>;

#[derive(Clone, Copy, PartialEq)]
struct Snapshot {
    index: usize,
    auto_play: bool,
}

impl Snapshot {
    fn of<T, S: Scheduler<RotatorEvent>>(rotator: &Rotator<T, S>) -> Self {
        Self {
            index: rotator.current_index(),
            auto_play: rotator.auto_play(),
        }
    }
}

/// View-side handle onto a mounted [`Rotator`].
pub struct UseRotatorHandle<T: 'static> {
    items: Rc<Vec<T>>,
    snapshot: UseStateHandle<Snapshot>,
    rotator: Rc<RefCell<Option<GlooRotator<T>>>>,
}

impl<T: 'static> UseRotatorHandle<T> {
    pub fn current_index(&self) -> usize {
        self.snapshot.index
    }

    pub fn auto_play(&self) -> bool {
        self.snapshot.auto_play
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn next<E: 'static>(&self) -> Callback<E> {
        self.command(|rotator| rotator.next())
    }

    pub fn previous<E: 'static>(&self) -> Callback<E> {
        self.command(|rotator| rotator.previous())
    }

    pub fn go_to<E: 'static>(&self, index: usize) -> Callback<E> {
        self.command(move |rotator| {
            if let Err(err) = rotator.go_to(index) {
                log::warn!("Ignoring navigation: {}", err);
            }
        })
    }

    pub fn toggle_auto_play<E: 'static>(&self) -> Callback<E> {
        self.command(|rotator| rotator.toggle_auto_play())
    }

    fn command<E: 'static>(&self, op: impl Fn(&mut GlooRotator<T>) + 'static) -> Callback<E> {
        let rotator = self.rotator.clone();
        let snapshot = self.snapshot.clone();
        Callback::from(move |_: E| {
            // Release the borrow before `set`, which may re-render.
            let next = rotator.borrow_mut().as_mut().map(|rotator| {
                op(rotator);
                Snapshot::of(rotator)
            });
            if let Some(next) = next {
                snapshot.set(next);
            }
        })
    }
}

/// Runs a [`Rotator`] for the lifetime of the calling component.
///
/// Items are built once on first render and never change. The rotator starts on mount
/// and is disposed on unmount, taking its timers with it.
#[hook]
pub fn use_rotator<T, F>(items: F, timing: RotatorTiming) -> UseRotatorHandle<T>
where
    T: Clone + 'static,
    F: FnOnce() -> Vec<T>,
{
    let items = (*use_state(|| Rc::new(items()))).clone();
    let snapshot = use_state(|| Snapshot {
        index: 0,
        auto_play: true,
    });
    let rotator = use_mut_ref(|| None::<GlooRotator<T>>);

    {
        let items = items.clone();
        let snapshot = snapshot.clone();
        let rotator = rotator.clone();
        use_effect_with_deps(
            move |_| {
                let on_event = {
                    let rotator = rotator.clone();
                    Callback::from(move |event: RotatorEvent| {
                        let next = rotator.borrow_mut().as_mut().map(|rotator| {
                            rotator.handle(event);
                            Snapshot::of(rotator)
                        });
                        if let Some(next) = next {
                            snapshot.set(next);
                        }
                    })
                };

                match Rotator::new((*items).clone(), timing, GlooScheduler::new(on_event)) {
                    Ok(started) => *rotator.borrow_mut() = Some(started),
                    Err(err) => log::warn!("Rotator not started: {}", err),
                }

                move || {
                    // Also breaks the rotator -> scheduler -> callback -> rotator cycle.
                    let taken = rotator.borrow_mut().take();
                    if let Some(taken) = taken {
                        taken.dispose();
                    }
                }
            },
            (),
        );
    }

    UseRotatorHandle {
        items,
        snapshot,
        rotator,
    }
}
