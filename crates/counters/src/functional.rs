//! The hook-style counter: state lives in a hook slot owned by the runtime
//! on behalf of the component instance.

use teacup::{Cmd, Component, FnComponent, Hooks, Message, View, function_component};

use crate::{INCREMENT_LABEL, count_label};

/// Heading shown above the hook-style counter.
pub const HEADING: &str = "Hook (Functional) Component Counter";

/// Render function of the hook-style counter.
///
/// Claims one `u64` state slot. The button replaces the slot's value with
/// the rendered count plus one.
pub fn counter_hook(hooks: &mut Hooks) -> View {
    let (count, set_count) = hooks.use_state(|| 0u64);

    View::new()
        .heading(HEADING)
        .text(count_label(count))
        .button(INCREMENT_LABEL, move || {
            set_count.set(count.saturating_add(1));
            None
        })
}

type RenderFn = fn(&mut Hooks) -> View;

/// A mountable instance of [`counter_hook`] with its own hook store.
pub struct FunctionalCounter {
    inner: FnComponent<RenderFn>,
}

impl FunctionalCounter {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self {
            inner: function_component(counter_hook as RenderFn),
        }
    }

    /// The current count; zero until the first render claims the slot.
    pub fn count(&self) -> u64 {
        self.inner.peek_state::<u64>(0).unwrap_or(0)
    }
}

impl Default for FunctionalCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FunctionalCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionalCounter")
            .field("count", &self.count())
            .finish()
    }
}

impl Component for FunctionalCounter {
    fn init(&self) -> Option<Cmd> {
        self.inner.init()
    }

    fn update(&mut self, msg: Message) -> Option<Cmd> {
        self.inner.update(msg)
    }

    fn view(&self) -> View {
        self.inner.view()
    }
}
