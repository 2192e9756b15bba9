#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Teacup
//!
//! A small terminal UI runtime in the Elm Architecture style, with two ways
//! to hold component-local state:
//!
//! - **Class style**: a struct implementing [`Component`], state in fields,
//!   changed by messages in `update`.
//! - **Function style**: a render function `Fn(&mut Hooks) -> View` turned
//!   into a component with [`function_component`], state in hook slots
//!   claimed with [`Hooks::use_state`].
//!
//! Either way the runtime owns mounting, rendering, focus and activation:
//! components describe their UI as a [`View`] and never write to the
//! terminal themselves.
//!
//! ## Example
//!
//! ```rust,ignore
//! use teacup::{Hooks, Program, View, function_component};
//!
//! fn counter(hooks: &mut Hooks) -> View {
//!     let (count, set_count) = hooks.use_state(|| 0u64);
//!     View::new()
//!         .text(format!("Count: {count}"))
//!         .button("Increment", move || {
//!             set_count.set(count + 1);
//!             None
//!         })
//! }
//!
//! Program::new(function_component(counter)).run()?;
//! ```
//!
//! ## Testing
//!
//! [`simulator::ProgramSimulator`] runs the same dispatch rules without a
//! terminal, so components can be tested with plain `#[test]` functions.

pub mod command;
pub mod component;
pub mod hooks;
pub mod key;
pub mod message;
pub mod mount;
pub mod mouse;
pub mod program;
pub mod simulator;
pub mod view;

pub use command::{Cmd, batch, quit};
pub use component::{Component, FnComponent, function_component};
pub use hooks::{Hooks, StateHandle};
pub use key::{KeyMsg, KeyType};
pub use message::{InterruptMsg, Message, QuitMsg, WindowSizeMsg};
pub use mount::{DispatchKind, Dispatched, Mount};
pub use mouse::{MouseAction, MouseButton, MouseMsg};
pub use program::{Error, Program, ProgramOptions, Result};
pub use view::{Button, Handler, Node, RenderOptions, View};
