#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Counters
//!
//! The same click counter written twice on top of [`teacup`]:
//!
//! - [`StatefulCounter`] keeps its count in a struct field and changes it
//!   from `update` when its button's [`Increment`](stateful::Increment)
//!   message arrives.
//! - [`FunctionalCounter`] is the render function [`counter_hook`], which
//!   keeps its count in a hook slot and bumps it from the button handler.
//!
//! Both render a heading, a `Count: N` line and an `Increment` button.
//! [`Showcase`] mounts either or both of them in one screen; the `counters`
//! binary runs it in the terminal.

pub mod cli;
pub mod config;
pub mod functional;
pub mod headless;
pub mod logging;
pub mod showcase;
pub mod stateful;

pub use config::{Config, ConfigError, Variant};
pub use functional::{FunctionalCounter, counter_hook};
pub use headless::{Target, render_after_clicks};
pub use showcase::{CounterKind, Showcase};
pub use stateful::StatefulCounter;

/// Label of the button both counters render.
pub const INCREMENT_LABEL: &str = "Increment";

/// The text line showing a count, e.g. `Count: 3`.
pub fn count_label(count: u64) -> String {
    format!("Count: {count}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0), "Count: 0");
        assert_eq!(count_label(17), "Count: 17");
    }
}
