//! Emits the last value once input has been quiet for the whole delay.

use std::marker::PhantomData;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use leptos::logging::error;
use leptos::prelude::*;

/// Source of one-shot timers. Dropping a handle must cancel its timer if it
/// has not fired yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>) -> Self::Handle;
}

pub struct Debouncer<T, S: Scheduler, F> {
    delay: Duration,
    scheduler: S,
    pending: Option<S::Handle>,
    emit: F,
    _value: PhantomData<fn(T)>,
}

impl<T, S, F> Debouncer<T, S, F>
where
    T: 'static,
    S: Scheduler,
    F: Fn(T) + Clone + 'static,
{
    pub fn new(scheduler: S, delay: Duration, emit: F) -> Self {
        Self {
            delay,
            scheduler,
            pending: None,
            emit,
            _value: PhantomData,
        }
    }

    pub fn push(&mut self, value: T) {
        self.cancel();

        let emit = self.emit.clone();
        let handle = self
            .scheduler
            .schedule(self.delay, Box::new(move || emit(value)));
        self.pending = Some(handle);
    }

    pub fn cancel(&mut self) {
        self.pending.take();
    }
}

/// Browser timers through `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

pub struct BrowserTimeout(Option<TimeoutHandle>);

impl Drop for BrowserTimeout {
    fn drop(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.clear();
        }
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>) -> BrowserTimeout {
        match set_timeout_with_handle(task, delay) {
            Ok(handle) => BrowserTimeout(Some(handle)),
            Err(err) => {
                error!("failed to set timeout: {:?}", err);
                BrowserTimeout(None)
            }
        }
    }
}

/// Follows `source`, but only after it has stopped changing for `delay`.
///
/// The pending timer belongs to the calling component and is cancelled when
/// that component is cleaned up.
pub fn use_debounced<T>(source: Signal<T>, delay: Duration) -> ReadSignal<T>
where
    T: Clone + Send + Sync + 'static,
{
    let (debounced, set_debounced) = create_signal(source.get_untracked());

    let debouncer = Arc::new(Mutex::new(Debouncer::new(
        BrowserScheduler,
        delay,
        move |value: T| set_debounced.set(value),
    )));

    #[cfg(not(feature = "ssr"))]
    {
        let debouncer = Arc::clone(&debouncer);
        Effect::new(move |_| {
            let value = source.get();
            if let Ok(mut debouncer) = debouncer.lock() {
                debouncer.push(value);
            }
        });
    }

    on_cleanup(move || {
        if let Ok(mut debouncer) = debouncer.lock() {
            debouncer.cancel();
        }
    });

    debounced
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use super::*;

    type Task = Box<dyn FnOnce()>;

    #[derive(Default)]
    struct Clock {
        now: Duration,
        next_id: u64,
        tasks: Vec<(u64, Duration, Task)>,
    }

    /// Timers that only fire when the test advances time.
    #[derive(Clone, Default)]
    struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    struct ManualHandle {
        id: u64,
        clock: Weak<RefCell<Clock>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Some(clock) = self.clock.upgrade() {
                clock.borrow_mut().tasks.retain(|(id, _, _)| *id != self.id);
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>) -> ManualHandle {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + delay;
            clock.tasks.push((id, due, task));
            ManualHandle {
                id,
                clock: Rc::downgrade(&self.clock),
            }
        }
    }

    impl ManualScheduler {
        fn advance(&self, by: Duration) {
            let due = {
                let mut clock = self.clock.borrow_mut();
                clock.now += by;
                let now = clock.now;
                let (due, waiting): (Vec<_>, Vec<_>) =
                    clock.tasks.drain(..).partition(|(_, at, _)| *at <= now);
                clock.tasks = waiting;
                due
            };
            for (_, _, task) in due {
                task();
            }
        }

        fn pending(&self) -> usize {
            self.clock.borrow().tasks.len()
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(String) + Clone) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |value: String| sink.borrow_mut().push(value))
    }

    const WINDOW: Duration = Duration::from_millis(300);

    #[test]
    fn burst_emits_once_with_last_value() {
        let scheduler = ManualScheduler::default();
        let (seen, emit) = recorder();
        let mut debouncer = Debouncer::new(scheduler.clone(), WINDOW, emit);

        for text in ["P", "Pa", "Par", "Pari", "Paris"] {
            debouncer.push(text.to_string());
            scheduler.advance(Duration::from_millis(120));
        }
        assert!(seen.borrow().is_empty());
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(Duration::from_millis(180));
        assert_eq!(*seen.borrow(), vec!["Paris".to_string()]);

        scheduler.advance(Duration::from_secs(5));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn nothing_fires_before_the_window_closes() {
        let scheduler = ManualScheduler::default();
        let (seen, emit) = recorder();
        let mut debouncer = Debouncer::new(scheduler.clone(), WINDOW, emit);

        debouncer.push("Roma".into());
        scheduler.advance(Duration::from_millis(299));
        assert!(seen.borrow().is_empty());

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(*seen.borrow(), vec!["Roma".to_string()]);
    }

    #[test]
    fn quiet_gaps_emit_each_value() {
        let scheduler = ManualScheduler::default();
        let (seen, emit) = recorder();
        let mut debouncer = Debouncer::new(scheduler.clone(), WINDOW, emit);

        debouncer.push("Lisboa".into());
        scheduler.advance(WINDOW);
        debouncer.push("Porto".into());
        scheduler.advance(WINDOW);

        assert_eq!(
            *seen.borrow(),
            vec!["Lisboa".to_string(), "Porto".to_string()]
        );
    }

    #[test]
    fn typing_then_clearing_only_emits_empty() {
        let scheduler = ManualScheduler::default();
        let (seen, emit) = recorder();
        let mut debouncer = Debouncer::new(scheduler.clone(), WINDOW, emit);

        for text in ["R", "Ri", "R", ""] {
            debouncer.push(text.to_string());
            scheduler.advance(Duration::from_millis(50));
        }
        scheduler.advance(WINDOW);

        assert_eq!(*seen.borrow(), vec![String::new()]);
    }

    #[test]
    fn cancel_and_drop_stop_pending_timer() {
        let scheduler = ManualScheduler::default();
        let (seen, emit) = recorder();

        let mut debouncer = Debouncer::new(scheduler.clone(), WINDOW, emit.clone());
        debouncer.push("Madrid".into());
        debouncer.cancel();
        assert_eq!(scheduler.pending(), 0);

        let mut dropped = Debouncer::new(scheduler.clone(), WINDOW, emit);
        dropped.push("Berlin".into());
        drop(dropped);
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(Duration::from_secs(1));
        assert!(seen.borrow().is_empty());
    }
}
