//! The top-level screen: one or both counters stacked vertically.
//!
//! Each child's view is mapped so its button messages come back wrapped in
//! a [`Routed`] envelope carrying the child's position. `update` unwraps the
//! envelope and hands the inner message to that child only.

use teacup::{Cmd, Component, KeyMsg, KeyType, Message, View, quit};
use tracing::trace;

use crate::config::{Config, Variant};
use crate::functional::FunctionalCounter;
use crate::stateful::StatefulCounter;

/// Footer shown under the counters unless help is disabled.
pub const HELP: &str = "tab: focus • enter/space: increment • q: quit";

/// Which implementation a mounted counter uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterKind {
    /// [`StatefulCounter`].
    Class,
    /// [`FunctionalCounter`].
    Hook,
}

impl CounterKind {
    /// Short name used in summaries.
    pub fn name(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Hook => "hook",
        }
    }
}

impl std::fmt::Display for CounterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug)]
enum Child {
    Class(StatefulCounter),
    Hook(FunctionalCounter),
}

impl Child {
    fn kind(&self) -> CounterKind {
        match self {
            Self::Class(_) => CounterKind::Class,
            Self::Hook(_) => CounterKind::Hook,
        }
    }

    fn count(&self) -> u64 {
        match self {
            Self::Class(counter) => counter.count(),
            Self::Hook(counter) => counter.count(),
        }
    }

    fn update(&mut self, msg: Message) -> Option<Cmd> {
        match self {
            Self::Class(counter) => counter.update(msg),
            Self::Hook(counter) => counter.update(msg),
        }
    }

    fn view(&self) -> View {
        match self {
            Self::Class(counter) => counter.view(),
            Self::Hook(counter) => counter.view(),
        }
    }
}

/// A child message tagged with the position of the child that produced it.
struct Routed {
    index: usize,
    msg: Message,
}

/// One or both counters in a single screen.
#[derive(Debug)]
pub struct Showcase {
    children: Vec<Child>,
    show_help: bool,
}

impl Showcase {
    /// Create a showcase mounting the counters selected by `variant`.
    ///
    /// With [`Variant::Both`] the class-style counter comes first.
    pub fn new(variant: Variant) -> Self {
        let children = match variant {
            Variant::Class => vec![Child::Class(StatefulCounter::new())],
            Variant::Hook => vec![Child::Hook(FunctionalCounter::new())],
            Variant::Both => vec![
                Child::Class(StatefulCounter::new()),
                Child::Hook(FunctionalCounter::new()),
            ],
        };
        Self {
            children,
            show_help: true,
        }
    }

    /// Create a showcase from the resolved configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.variant).with_help(config.show_help)
    }

    /// Show or hide the key help footer.
    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Kinds of the mounted counters, top to bottom.
    pub fn kinds(&self) -> Vec<CounterKind> {
        self.children.iter().map(Child::kind).collect()
    }

    /// Current count of every mounted counter, top to bottom.
    pub fn counts(&self) -> Vec<(CounterKind, u64)> {
        self.children
            .iter()
            .map(|child| (child.kind(), child.count()))
            .collect()
    }

    /// One-line summary such as `final counts: class=2 hook=1`.
    pub fn summary(&self) -> String {
        let parts: Vec<String> = self
            .counts()
            .into_iter()
            .map(|(kind, count)| format!("{kind}={count}"))
            .collect();
        format!("final counts: {}", parts.join(" "))
    }
}

fn is_quit_key(key: &KeyMsg) -> bool {
    match key.key_type {
        KeyType::Esc | KeyType::CtrlC => true,
        KeyType::Runes => matches!(key.rune(), Some('q' | 'Q')),
        _ => false,
    }
}

impl Component for Showcase {
    fn update(&mut self, msg: Message) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            if is_quit_key(key) {
                return Some(quit());
            }
            return None;
        }

        let Routed { index, msg } = msg.downcast::<Routed>()?;
        trace!(index, "routing message to counter");
        self.children.get_mut(index)?.update(msg)
    }

    fn view(&self) -> View {
        let mut view = View::new();
        for (index, child) in self.children.iter().enumerate() {
            if index > 0 {
                view = view.spacer();
            }
            view = view.append(
                child
                    .view()
                    .map(move |msg| Message::new(Routed { index, msg })),
            );
        }
        if self.show_help {
            view = view.spacer().text(HELP);
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teacup::simulator::ProgramSimulator;

    fn key_char(c: char) -> KeyMsg {
        KeyMsg::from_char(c)
    }

    #[test]
    fn test_variants_mount_expected_counters() {
        assert_eq!(Showcase::new(Variant::Class).kinds(), vec![CounterKind::Class]);
        assert_eq!(Showcase::new(Variant::Hook).kinds(), vec![CounterKind::Hook]);
        assert_eq!(
            Showcase::new(Variant::Both).kinds(),
            vec![CounterKind::Class, CounterKind::Hook]
        );
    }

    #[test]
    fn test_routes_activation_to_one_child() {
        let mut sim = ProgramSimulator::new(Showcase::new(Variant::Both));
        sim.init();
        assert!(sim.activate(0));
        assert_eq!(
            sim.model().counts(),
            vec![(CounterKind::Class, 1), (CounterKind::Hook, 0)]
        );
        assert!(sim.activate(1));
        assert_eq!(
            sim.model().counts(),
            vec![(CounterKind::Class, 1), (CounterKind::Hook, 1)]
        );
    }

    #[test]
    fn test_view_has_one_button_per_counter() {
        let view = Showcase::new(Variant::Both).view();
        assert_eq!(view.button_labels(), vec!["Increment", "Increment"]);
    }

    #[test]
    fn test_help_footer_toggle() {
        let shown = Showcase::new(Variant::Class).view().to_plain_string();
        assert!(shown.ends_with(HELP));
        let hidden = Showcase::new(Variant::Class)
            .with_help(false)
            .view()
            .to_plain_string();
        assert!(!hidden.contains(HELP));
        assert_eq!(hidden, "Class Component Counter\nCount: 0\n  [ Increment ]");
    }

    #[test]
    fn test_quit_keys() {
        for key in [
            key_char('q'),
            key_char('Q'),
            KeyMsg::from_type(KeyType::Esc),
            KeyMsg::from_type(KeyType::CtrlC),
        ] {
            let mut sim = ProgramSimulator::new(Showcase::new(Variant::Both));
            sim.init();
            let cmd = sim.press(key);
            assert!(cmd.is_some());
            assert!(cmd.unwrap().execute().unwrap().is::<teacup::QuitMsg>());
        }
    }

    #[test]
    fn test_other_keys_do_nothing() {
        let mut showcase = Showcase::new(Variant::Both);
        assert!(showcase.update(Message::new(key_char('x'))).is_none());
        assert_eq!(
            showcase.counts(),
            vec![(CounterKind::Class, 0), (CounterKind::Hook, 0)]
        );
    }

    #[test]
    fn test_unrouted_messages_are_ignored() {
        let mut showcase = Showcase::new(Variant::Class);
        assert!(
            showcase
                .update(Message::new(crate::stateful::Increment))
                .is_none()
        );
        assert_eq!(showcase.counts(), vec![(CounterKind::Class, 0)]);
    }

    #[test]
    fn test_summary() {
        let mut sim = ProgramSimulator::new(Showcase::new(Variant::Both));
        sim.activate(0);
        sim.activate(0);
        sim.activate(1);
        assert_eq!(sim.model().summary(), "final counts: class=2 hook=1");
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            variant: Variant::Hook,
            show_help: false,
            ..Config::default()
        };
        let showcase = Showcase::from_config(&config);
        assert_eq!(showcase.kinds(), vec![CounterKind::Hook]);
        assert!(!showcase.view().to_plain_string().contains(HELP));
    }
}
