//! Commands for side effects.
//!
//! Commands are lazily executed closures that may produce a message. The
//! runtime executes them and feeds the resulting message back into the
//! component's `update`.

use std::fmt;

use crate::message::{BatchMsg, Message, QuitMsg};

/// A command that produces a message when executed.
///
/// Commands are lazy: they don't execute until the runtime runs them, which
/// keeps `update` free of side effects.
///
/// # Example
///
/// ```rust
/// use teacup::{Cmd, Message};
///
/// let cmd = Cmd::new(|| Message::new("done"));
/// assert!(cmd.execute().is_some());
/// ```
pub struct Cmd(Box<dyn FnOnce() -> Option<Message> + Send + 'static>);

impl Cmd {
    /// Create a new command from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Message + Send + 'static,
    {
        Self(Box::new(move || Some(f())))
    }

    /// Create a command that may not produce a message.
    pub fn new_optional<F>(f: F) -> Self
    where
        F: FnOnce() -> Option<Message> + Send + 'static,
    {
        Self(Box::new(f))
    }

    /// Create an empty command that does nothing.
    pub fn none() -> Option<Self> {
        None
    }

    /// Execute the command and return the resulting message.
    pub fn execute(self) -> Option<Message> {
        (self.0)()
    }
}

impl fmt::Debug for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cmd").finish_non_exhaustive()
    }
}

/// Batch multiple commands into one.
///
/// `Program` runs batched commands concurrently; the simulator runs them in
/// order.
pub fn batch(cmds: Vec<Option<Cmd>>) -> Option<Cmd> {
    let valid_cmds: Vec<Cmd> = cmds.into_iter().flatten().collect();

    match valid_cmds.len() {
        0 => None,
        1 => valid_cmds.into_iter().next(),
        _ => Some(Cmd::new(move || Message::new(BatchMsg(valid_cmds)))),
    }
}

/// Command that signals the program to quit.
pub fn quit() -> Cmd {
    Cmd::new(|| Message::new(QuitMsg))
}

/// Execute a command, expanding batches, and collect every produced message.
pub(crate) fn run_to_messages(cmd: Cmd) -> Vec<Message> {
    let Some(msg) = cmd.execute() else {
        return Vec::new();
    };
    if !msg.is::<BatchMsg>() {
        return vec![msg];
    }
    msg.downcast::<BatchMsg>()
        .map(|BatchMsg(cmds)| cmds.into_iter().flat_map(run_to_messages).collect())
        .unwrap_or_default()
}
