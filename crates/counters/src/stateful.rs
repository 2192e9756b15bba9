//! The class-style counter: state lives in a field of the component struct.

use teacup::{Cmd, Component, Message, View};

use crate::{INCREMENT_LABEL, count_label};

/// Heading shown above the class-style counter.
pub const HEADING: &str = "Class Component Counter";

/// Message produced by the counter's button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Increment;

/// A counter that owns its count as a plain field.
///
/// The button produces an [`Increment`] message; `update` bumps the field
/// and the runtime renders the new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatefulCounter {
    count: u64,
}

impl StatefulCounter {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self { count: 0 }
    }

    /// The current count.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Add one to the count.
    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }
}

impl Component for StatefulCounter {
    fn update(&mut self, msg: Message) -> Option<Cmd> {
        if msg.is::<Increment>() {
            self.increment();
        }
        None
    }

    fn view(&self) -> View {
        View::new()
            .heading(HEADING)
            .text(count_label(self.count))
            .button(INCREMENT_LABEL, || Some(Message::new(Increment)))
    }
}
