//! The component contract and the function-component adapter.

use parking_lot::Mutex;

use crate::command::Cmd;
use crate::hooks::Hooks;
use crate::message::Message;
use crate::view::View;

/// A mountable unit of UI logic.
///
/// Class-style components keep their state in fields, change it in
/// [`update`](Component::update) and describe it in
/// [`view`](Component::view). The runtime calls `view` again after every
/// message, so output always reflects current state.
///
/// # Example
///
/// ```rust
/// use teacup::{Cmd, Component, Message, View};
///
/// struct Bump;
///
/// #[derive(Default)]
/// struct Clicks { n: u64 }
///
/// impl Component for Clicks {
///     fn update(&mut self, msg: Message) -> Option<Cmd> {
///         if msg.is::<Bump>() {
///             self.n += 1;
///         }
///         None
///     }
///
///     fn view(&self) -> View {
///         View::new()
///             .text(format!("Clicks: {}", self.n))
///             .button("Bump", || Some(Message::new(Bump)))
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// Return an optional startup command. Called once, on mount.
    fn init(&self) -> Option<Cmd> {
        None
    }

    /// Process a message and return an optional command.
    fn update(&mut self, msg: Message) -> Option<Cmd>;

    /// Describe the current state. Must not have side effects.
    fn view(&self) -> View;
}

/// A component backed by a render function and its own hook store.
///
/// Created with [`function_component`]. Every instance owns a separate
/// [`Hooks`] store, so two instances of the same render function never see
/// each other's state.
pub struct FnComponent<F> {
    render: F,
    hooks: Mutex<Hooks>,
}

/// Turn a render function into a mountable component.
///
/// # Example
///
/// ```rust
/// use teacup::{Component, Hooks, View, function_component};
///
/// let counter = function_component(|hooks: &mut Hooks| {
///     let (count, set_count) = hooks.use_state(|| 0u64);
///     View::new()
///         .text(format!("Count: {count}"))
///         .button("Increment", move || {
///             set_count.set(count + 1);
///             None
///         })
/// });
///
/// counter.view().button_at(0).unwrap().activate();
/// assert_eq!(counter.view().texts(), vec!["Count: 1"]);
/// ```
pub fn function_component<F>(render: F) -> FnComponent<F>
where
    F: Fn(&mut Hooks) -> View + Send + 'static,
{
    FnComponent {
        render,
        hooks: Mutex::new(Hooks::new()),
    }
}

impl<F> FnComponent<F> {
    /// Read hook slot `index` of this instance.
    pub fn peek_state<T: Clone + 'static>(&self, index: usize) -> Option<T> {
        self.hooks.lock().peek(index)
    }
}

impl<F> Component for FnComponent<F>
where
    F: Fn(&mut Hooks) -> View + Send + 'static,
{
    // Hook setters write their slot directly; there are no messages to handle.
    fn update(&mut self, _msg: Message) -> Option<Cmd> {
        None
    }

    fn view(&self) -> View {
        let mut hooks = self.hooks.lock();
        hooks.begin_render();
        (self.render)(&mut hooks)
    }
}
