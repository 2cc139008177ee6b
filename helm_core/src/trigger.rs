//! Level-triggered boolean conditions
//!
//! A `Trigger` wraps a condition that is re-evaluated on every `get()`.
//! Consumers that want to act on presses or releases keep their own
//! `EdgeDetector`; the trigger itself is stateless and can be cloned freely.

use std::fmt;
use std::sync::Arc;

use crate::hid::{GenericHid, Port};

/// Physical button a trigger reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonBinding {
    pub port: Port,
    pub button: usize,
}

/// Clonable boolean condition
#[derive(Clone)]
pub struct Trigger {
    condition: Arc<dyn Fn() -> bool + Send + Sync>,
    binding: Option<ButtonBinding>,
}

impl Trigger {
    /// Trigger backed by an arbitrary condition
    pub fn new<F>(condition: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Self {
            condition: Arc::new(condition),
            binding: None,
        }
    }

    /// Trigger whose condition is permanently false
    pub fn never() -> Self {
        Self::new(|| false)
    }

    /// Trigger active while `button` (1-based) on `hid` is held
    pub fn button(hid: GenericHid, button: usize) -> Self {
        let binding = ButtonBinding {
            port: hid.port(),
            button,
        };
        Self {
            condition: Arc::new(move || hid.raw_button(button)),
            binding: Some(binding),
        }
    }

    /// Current state of the condition
    pub fn get(&self) -> bool {
        (self.condition)()
    }

    /// The physical button this trigger reads, if it reads exactly one
    pub fn binding(&self) -> Option<ButtonBinding> {
        self.binding
    }

    pub fn and(&self, other: &Trigger) -> Trigger {
        let (a, b) = (self.clone(), other.clone());
        Trigger::new(move || a.get() && b.get())
    }

    pub fn or(&self, other: &Trigger) -> Trigger {
        let (a, b) = (self.clone(), other.clone());
        Trigger::new(move || a.get() || b.get())
    }

    pub fn negate(&self) -> Trigger {
        let a = self.clone();
        Trigger::new(move || !a.get())
    }
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger")
            .field("binding", &self.binding)
            .finish_non_exhaustive()
    }
}

/// Transition observed between two samples of a trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Rising,
    Falling,
    None,
}

/// Remembers the previous sample of a trigger to report edges
#[derive(Debug, Clone, Default)]
pub struct EdgeDetector {
    last: bool,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the trigger and report the transition since the last call
    pub fn update(&mut self, trigger: &Trigger) -> Edge {
        let current = trigger.get();
        let edge = match (self.last, current) {
            (false, true) => Edge::Rising,
            (true, false) => Edge::Falling,
            _ => Edge::None,
        };
        self.last = current;
        edge
    }

    pub fn last(&self) -> bool {
        self.last
    }
}
