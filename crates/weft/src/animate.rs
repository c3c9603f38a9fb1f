//! A frame scheduler owned by the application root. Tick callbacks are
//! plain entries in a list, and throttling is a property of an entry
//! rather than a wrapper object, so there is no hidden double dispatch.

use std::time::{Duration, Instant};

use tracing::trace;

type TickFn = Box<dyn FnMut(Duration)>;

struct Entry {
    id: u64,
    min_interval: Option<Duration>,
    last_fired: Option<Instant>,
    tick: TickFn,
}

/// Drives registered tick callbacks. Each callback receives the time
/// elapsed since it last fired. Throttled entries are skipped until their
/// minimum interval has passed.
#[derive(Default)]
pub struct Scheduler {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, min_interval: Option<Duration>, tick: TickFn) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            min_interval,
            last_fired: None,
            tick,
        });
        id
    }

    /// Register a callback fired on every tick. Returns a handle for
    /// [`Scheduler::remove`].
    pub fn add<F>(&mut self, tick: F) -> u64
    where
        F: FnMut(Duration) + 'static,
    {
        self.insert(None, Box::new(tick))
    }

    /// Register a callback fired at most once per `interval`.
    pub fn add_throttled<F>(&mut self, interval: Duration, tick: F) -> u64
    where
        F: FnMut(Duration) + 'static,
    {
        self.insert(Some(interval), Box::new(tick))
    }

    /// Deregister a callback. Returns false if the handle is unknown.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fire every due callback. A callback's first firing reports a zero
    /// elapsed duration.
    pub fn tick(&mut self, now: Instant) {
        for entry in &mut self.entries {
            let elapsed = entry
                .last_fired
                .map_or(Duration::ZERO, |t| now.saturating_duration_since(t));
            if let Some(min) = entry.min_interval {
                if entry.last_fired.is_some() && elapsed < min {
                    continue;
                }
            }
            trace!(id = entry.id, ?elapsed, "tick");
            entry.last_fired = Some(now);
            (entry.tick)(elapsed);
        }
    }
}
