//! A mounted component: its latest view, button focus, and the dispatch
//! rules shared by [`Program`](crate::Program) and
//! [`ProgramSimulator`](crate::simulator::ProgramSimulator).
//!
//! Dispatch rules:
//!
//! | Input | Effect |
//! |-------|--------|
//! | `Tab`, `Down`, `Right` | focus next button (wraps) |
//! | `Shift+Tab`, `Up`, `Left` | focus previous button (wraps) |
//! | `Enter`, `Space` | activate the focused button |
//! | left mouse press on a button row | activate that button |
//! | anything else | `update`, then re-render |

use tracing::{debug, trace};

use crate::command::Cmd;
use crate::component::Component;
use crate::key::{KeyMsg, KeyType};
use crate::message::Message;
use crate::mouse::MouseMsg;
use crate::view::{RenderOptions, View};

/// How a dispatched message was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchKind {
    /// Focus moved between buttons.
    Focus,
    /// The button at this index was activated.
    Activation(usize),
    /// The message went to the component's `update`.
    Update,
}

/// Result of [`Mount::dispatch`] and [`Mount::activate`].
#[derive(Debug)]
pub struct Dispatched {
    /// How the message was consumed.
    pub kind: DispatchKind,
    /// Whether the component's `update` ran.
    pub updated: bool,
    /// Command returned by `update`, if any.
    pub cmd: Option<Cmd>,
}

/// A component together with its most recent [`View`].
pub struct Mount<C: Component> {
    component: C,
    view: View,
    focus: usize,
    mounted: bool,
    renders: usize,
}

impl<C: Component> Mount<C> {
    /// Wrap a component. Nothing runs until [`mount`](Self::mount).
    pub fn new(component: C) -> Self {
        Self {
            component,
            view: View::new(),
            focus: 0,
            mounted: false,
            renders: 0,
        }
    }

    /// Run `init` and the first render. Later calls do nothing.
    pub fn mount(&mut self) -> Option<Cmd> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        debug!(component = std::any::type_name::<C>(), "mounting component");
        let cmd = self.component.init();
        self.render();
        cmd
    }

    /// Whether [`mount`](Self::mount) has run.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Recompute the view from current state.
    pub fn render(&mut self) {
        self.view = self.component.view();
        self.renders += 1;
        let count = self.view.button_count();
        if self.focus >= count {
            self.focus = count.saturating_sub(1);
        }
        trace!(renders = self.renders, buttons = count, "rendered view");
    }

    /// Route one message according to the dispatch rules.
    pub fn dispatch(&mut self, msg: Message) -> Dispatched {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            match key.key_type {
                KeyType::Tab | KeyType::Down | KeyType::Right => {
                    self.move_focus(true);
                    return Self::focus_only();
                }
                KeyType::ShiftTab | KeyType::Up | KeyType::Left => {
                    self.move_focus(false);
                    return Self::focus_only();
                }
                KeyType::Enter | KeyType::Space => {
                    if let Some(dispatched) = self.activate(self.focus) {
                        return dispatched;
                    }
                }
                _ => {}
            }
        }

        if let Some(mouse) = msg.downcast_ref::<MouseMsg>() {
            if mouse.is_left_press() {
                if let Some(index) = self.view.button_at_row(mouse.y) {
                    if let Some(dispatched) = self.activate(index) {
                        return dispatched;
                    }
                }
            }
        }

        let cmd = self.component.update(msg);
        self.render();
        Dispatched {
            kind: DispatchKind::Update,
            updated: true,
            cmd,
        }
    }

    /// Activate the button at `index` of the current view.
    ///
    /// Runs the button's handler once; a returned message goes to `update`.
    /// The view is re-rendered afterwards. Returns `None` if there is no
    /// such button.
    pub fn activate(&mut self, index: usize) -> Option<Dispatched> {
        let button = self.view.button_at(index)?.clone();
        self.focus = index;
        debug!(index, label = button.label(), "activating button");

        let (updated, cmd) = match button.activate() {
            Some(msg) => (true, self.component.update(msg)),
            None => (false, None),
        };
        self.render();
        Some(Dispatched {
            kind: DispatchKind::Activation(index),
            updated,
            cmd,
        })
    }

    fn move_focus(&mut self, forward: bool) {
        let count = self.view.button_count();
        if count == 0 {
            return;
        }
        self.focus = if forward {
            (self.focus + 1) % count
        } else {
            (self.focus + count - 1) % count
        };
        debug!(focus = self.focus, "focus moved");
    }

    fn focus_only() -> Dispatched {
        Dispatched {
            kind: DispatchKind::Focus,
            updated: false,
            cmd: None,
        }
    }

    /// The focused button index, if the view has buttons.
    pub fn focus(&self) -> Option<usize> {
        (self.view.button_count() > 0).then_some(self.focus)
    }

    /// The most recent view.
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Number of renders so far.
    pub fn renders(&self) -> usize {
        self.renders
    }

    /// Lay out the most recent view with the focus marker.
    pub fn frame(&self, color: bool) -> String {
        self.view.render(&RenderOptions {
            color,
            focus: self.focus(),
        })
    }

    /// Borrow the component.
    pub fn component(&self) -> &C {
        &self.component
    }

    /// Mutably borrow the component. Call [`render`](Self::render) after
    /// changing state this way.
    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    /// Unmount and return the component.
    pub fn into_component(self) -> C {
        self.component
    }
}
