//! Program simulator for testing components without a real terminal.
//!
//! The simulator drives a [`Mount`] exactly like [`Program`](crate::Program)
//! does, minus raw mode and event polling, and records every rendered view.

use std::collections::VecDeque;

use crate::command::{Cmd, quit, run_to_messages};
use crate::component::Component;
use crate::key::KeyMsg;
use crate::message::{InterruptMsg, Message, QuitMsg};
use crate::mount::{DispatchKind, Dispatched, Mount};

/// Statistics tracked during simulation.
#[derive(Debug, Clone, Default)]
pub struct SimulationStats {
    /// Number of times init() was called.
    pub init_calls: usize,
    /// Number of times update() was called.
    pub update_calls: usize,
    /// Number of times view() was called.
    pub view_calls: usize,
    /// Number of button activations.
    pub activations: usize,
    /// Commands that were returned from init/update.
    pub commands_returned: usize,
    /// Whether quit was requested.
    pub quit_requested: bool,
}

/// A simulator for testing components without a terminal.
///
/// # Example
///
/// ```rust
/// use teacup::{Cmd, Component, Message, View, simulator::ProgramSimulator};
///
/// struct Bump;
///
/// struct Clicks { n: u64 }
///
/// impl Component for Clicks {
///     fn update(&mut self, msg: Message) -> Option<Cmd> {
///         if msg.is::<Bump>() { self.n += 1; }
///         None
///     }
///     fn view(&self) -> View {
///         View::new()
///             .text(format!("Clicks: {}", self.n))
///             .button("Bump", || Some(Message::new(Bump)))
///     }
/// }
///
/// let mut sim = ProgramSimulator::new(Clicks { n: 0 });
/// sim.activate(0);
/// sim.activate_label("Bump");
///
/// assert_eq!(sim.model().n, 2);
/// assert_eq!(sim.last_view(), Some("Clicks: 2\n  [ Bump ]"));
/// ```
pub struct ProgramSimulator<C: Component> {
    mount: Mount<C>,
    input_queue: VecDeque<Message>,
    output_views: Vec<String>,
    stats: SimulationStats,
}

impl<C: Component> ProgramSimulator<C> {
    /// Create a new simulator with the given component.
    pub fn new(component: C) -> Self {
        Self {
            mount: Mount::new(component),
            input_queue: VecDeque::new(),
            output_views: Vec::new(),
            stats: SimulationStats::default(),
        }
    }

    /// Mount the component, calling init() and capturing any returned command.
    pub fn init(&mut self) -> Option<Cmd> {
        if self.mount.is_mounted() {
            return None;
        }
        self.stats.init_calls += 1;
        self.stats.view_calls += 1;

        let cmd = self.mount.mount();
        if cmd.is_some() {
            self.stats.commands_returned += 1;
        }
        self.record_view();
        cmd
    }

    /// Queue a message for processing.
    pub fn send(&mut self, msg: Message) {
        self.input_queue.push_back(msg);
    }

    /// Process one message from the queue.
    ///
    /// Returns the command produced by the component, if any.
    pub fn step(&mut self) -> Option<Cmd> {
        if !self.mount.is_mounted() {
            self.init();
        }

        let msg = self.input_queue.pop_front()?;
        if msg.is::<QuitMsg>() || msg.is::<InterruptMsg>() {
            self.stats.quit_requested = true;
            return Some(quit());
        }

        let dispatched = self.mount.dispatch(msg);
        self.absorb(dispatched)
    }

    /// Queue a key press and process it immediately.
    pub fn press(&mut self, key: KeyMsg) -> Option<Cmd> {
        self.input_queue.push_front(Message::new(key));
        self.step()
    }

    /// Activate the button at `index` of the current view, then process any
    /// messages its command produces.
    ///
    /// Returns `false` if the view has no such button.
    pub fn activate(&mut self, index: usize) -> bool {
        if !self.mount.is_mounted() {
            self.init();
        }

        let Some(dispatched) = self.mount.activate(index) else {
            return false;
        };
        if let Some(cmd) = self.absorb(dispatched) {
            self.input_queue.extend(run_to_messages(cmd));
            self.run_until_empty();
        }
        true
    }

    /// Activate the first button labelled `label`.
    ///
    /// Returns `false` if the view has no such button.
    pub fn activate_label(&mut self, label: &str) -> bool {
        if !self.mount.is_mounted() {
            self.init();
        }

        let found = self
            .mount
            .view()
            .buttons()
            .position(|b| b.label() == label);
        match found {
            Some(index) => self.activate(index),
            None => false,
        }
    }

    /// Process all pending messages until the queue is empty or quit is requested.
    ///
    /// Returns the number of messages processed.
    pub fn run_until_empty(&mut self) -> usize {
        let mut processed = 0;
        while !self.input_queue.is_empty() && !self.stats.quit_requested {
            if let Some(cmd) = self.step() {
                self.input_queue.extend(run_to_messages(cmd));
            }
            processed += 1;
        }
        processed
    }

    /// Run until quit is received or `max_steps` is reached.
    ///
    /// Returns the number of steps processed.
    pub fn run_until_quit(&mut self, max_steps: usize) -> usize {
        let mut steps = 0;
        while steps < max_steps && !self.stats.quit_requested {
            if self.input_queue.is_empty() {
                break;
            }
            if let Some(cmd) = self.step() {
                self.input_queue.extend(run_to_messages(cmd));
            }
            steps += 1;
        }
        steps
    }

    fn absorb(&mut self, dispatched: Dispatched) -> Option<Cmd> {
        if dispatched.updated {
            self.stats.update_calls += 1;
        }
        if let DispatchKind::Activation(_) = dispatched.kind {
            self.stats.activations += 1;
        }
        if dispatched.kind != DispatchKind::Focus {
            self.stats.view_calls += 1;
        }
        if dispatched.cmd.is_some() {
            self.stats.commands_returned += 1;
        }
        self.record_view();
        dispatched.cmd
    }

    fn record_view(&mut self) {
        self.output_views.push(self.mount.view().to_plain_string());
    }

    /// Get a reference to the current component state.
    pub fn model(&self) -> &C {
        self.mount.component()
    }

    /// Get a mutable reference to the current component state.
    ///
    /// Direct changes are not rendered until the next processed message.
    pub fn model_mut(&mut self) -> &mut C {
        self.mount.component_mut()
    }

    /// Consume the simulator and return the final component.
    pub fn into_model(self) -> C {
        self.mount.into_component()
    }

    /// The mounted component with its current view and focus.
    pub fn mount(&self) -> &Mount<C> {
        &self.mount
    }

    /// Get the simulation statistics.
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// Get all captured view outputs.
    pub fn views(&self) -> &[String] {
        &self.output_views
    }

    /// Get the most recent view output.
    pub fn last_view(&self) -> Option<&str> {
        self.output_views.last().map(String::as_str)
    }

    /// Check if quit has been requested.
    pub fn is_quit(&self) -> bool {
        self.stats.quit_requested
    }

    /// Check if the component has been mounted.
    pub fn is_initialized(&self) -> bool {
        self.mount.is_mounted()
    }

    /// Get the number of pending messages.
    pub fn pending_count(&self) -> usize {
        self.input_queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyType;
    use crate::view::View;

    struct Add(u64);
    struct Stop;

    #[derive(Default)]
    struct Tally {
        value: u64,
    }

    impl Component for Tally {
        fn update(&mut self, msg: Message) -> Option<Cmd> {
            if let Some(Add(n)) = msg.downcast_ref::<Add>() {
                self.value += n;
            } else if msg.is::<Stop>() {
                return Some(quit());
            }
            None
        }

        fn view(&self) -> View {
            View::new()
                .text(format!("Value: {}", self.value))
                .button("Add", || Some(Message::new(Add(1))))
                .button("Stop", || Some(Message::new(Stop)))
        }
    }

    #[test]
    fn test_simulator_init_called_once() {
        let mut sim = ProgramSimulator::new(Tally::default());
        sim.init();
        sim.init();
        assert_eq!(sim.stats().init_calls, 1);
        assert_eq!(sim.views().len(), 1);
        assert_eq!(sim.last_view(), Some("Value: 0\n  [ Add ]\n  [ Stop ]"));
    }

    #[test]
    fn test_simulator_implicit_init() {
        let mut sim = ProgramSimulator::new(Tally::default());
        sim.send(Message::new(Add(2)));
        sim.step();
        assert!(sim.is_initialized());
        assert_eq!(sim.model().value, 2);
    }

    #[test]
    fn test_simulator_stats() {
        let mut sim = ProgramSimulator::new(Tally::default());
        sim.init();
        sim.send(Message::new(Add(1)));
        sim.send(Message::new(Add(2)));
        sim.step();
        sim.step();
        sim.activate(0);

        let stats = sim.stats();
        assert_eq!(stats.init_calls, 1);
        assert_eq!(stats.update_calls, 3);
        assert_eq!(stats.activations, 1);
        // 1 on mount + 2 updates + 1 activation
        assert_eq!(stats.view_calls, 4);
        assert!(!stats.quit_requested);
        assert_eq!(sim.model().value, 4);
    }

    #[test]
    fn test_simulator_quit_stops_processing() {
        let mut sim = ProgramSimulator::new(Tally::default());
        sim.init();
        sim.send(Message::new(Add(1)));
        sim.send(Message::new(QuitMsg));
        sim.send(Message::new(Add(2)));

        sim.run_until_quit(10);

        assert!(sim.is_quit());
        assert_eq!(sim.model().value, 1); // Only first increment processed
    }

    #[test]
    fn test_simulator_button_command_quits() {
        let mut sim = ProgramSimulator::new(Tally::default());
        assert!(sim.activate_label("Stop"));
        assert!(sim.is_quit());
    }

    #[test]
    fn test_simulator_press_keys() {
        let mut sim = ProgramSimulator::new(Tally::default());
        sim.press(KeyMsg::from_type(KeyType::Enter));
        sim.press(KeyMsg::from_type(KeyType::Space));
        assert_eq!(sim.model().value, 2);
        assert_eq!(sim.stats().activations, 2);
    }

    #[test]
    fn test_simulator_activate_label_picks_first_match() {
        struct Twice;

        impl Component for Twice {
            fn update(&mut self, msg: Message) -> Option<Cmd> {
                if msg.is::<Stop>() {
                    return Some(quit());
                }
                None
            }

            fn view(&self) -> View {
                View::new()
                    .button("Go", || Some(Message::new(Stop)))
                    .button("Go", || None)
            }
        }

        let mut sim = ProgramSimulator::new(Twice);
        assert!(sim.activate_label("Go"));
        assert_eq!(sim.mount().focus(), Some(0));
        assert!(sim.is_quit());
    }

    #[test]
    fn test_simulator_missing_button() {
        let mut sim = ProgramSimulator::new(Tally::default());
        assert!(!sim.activate(5));
        assert!(!sim.activate_label("Nope"));
        assert_eq!(sim.model().value, 0);
    }

    #[test]
    fn test_simulator_run_until_empty() {
        let mut sim = ProgramSimulator::new(Tally::default());
        sim.send(Message::new(Add(1)));
        sim.send(Message::new(Add(2)));
        sim.send(Message::new(Add(3)));

        assert_eq!(sim.run_until_empty(), 3);
        assert_eq!(sim.into_model().value, 6);
    }
}
