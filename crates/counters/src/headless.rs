//! Headless rendering: drive a [`Showcase`] through the simulator and return
//! the plain text screen, no terminal required.

use clap::ValueEnum;
use teacup::simulator::ProgramSimulator;
use tracing::debug;

use crate::showcase::{CounterKind, Showcase};

/// Which counters receive clicks in a headless render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Target {
    /// Only class-style counters.
    Class,
    /// Only hook-style counters.
    Hook,
    /// Every mounted counter.
    #[default]
    All,
}

impl Target {
    /// Whether a counter of `kind` is targeted.
    pub fn includes(self, kind: CounterKind) -> bool {
        match self {
            Self::Class => kind == CounterKind::Class,
            Self::Hook => kind == CounterKind::Hook,
            Self::All => true,
        }
    }
}

/// Mount `showcase`, click every targeted counter's button `clicks` times
/// and return the final plain text screen.
///
/// Clicks are interleaved: one round clicks each targeted counter once,
/// top to bottom.
pub fn render_after_clicks(showcase: Showcase, clicks: u32, target: Target) -> String {
    // Every counter renders exactly one button, so button index == counter index.
    let targeted: Vec<usize> = showcase
        .kinds()
        .into_iter()
        .enumerate()
        .filter(|(_, kind)| target.includes(*kind))
        .map(|(index, _)| index)
        .collect();

    let mut sim = ProgramSimulator::new(showcase);
    sim.init();
    for _ in 0..clicks {
        for &index in &targeted {
            sim.activate(index);
        }
    }
    debug!(
        clicks,
        ?target,
        activations = sim.stats().activations,
        "headless render finished"
    );

    sim.mount().view().to_plain_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variant;
    use teacup::Component;

    #[test]
    fn test_target_includes() {
        assert!(Target::All.includes(CounterKind::Class));
        assert!(Target::All.includes(CounterKind::Hook));
        assert!(Target::Class.includes(CounterKind::Class));
        assert!(!Target::Class.includes(CounterKind::Hook));
        assert!(!Target::Hook.includes(CounterKind::Class));
    }

    #[test]
    fn test_zero_clicks_is_initial_screen() {
        let screen = render_after_clicks(Showcase::new(Variant::Both), 0, Target::All);
        assert_eq!(screen, Showcase::new(Variant::Both).view().to_plain_string());
    }

    #[test]
    fn test_clicks_only_targeted_counter() {
        let screen = render_after_clicks(
            Showcase::new(Variant::Both).with_help(false),
            2,
            Target::Hook,
        );
        assert_eq!(
            screen,
            "Class Component Counter\nCount: 0\n  [ Increment ]\n\n\
             Hook (Functional) Component Counter\nCount: 2\n  [ Increment ]"
        );
    }

    #[test]
    fn test_target_not_mounted() {
        let screen = render_after_clicks(
            Showcase::new(Variant::Class).with_help(false),
            4,
            Target::Hook,
        );
        assert!(screen.contains("Count: 0"));
    }
}
