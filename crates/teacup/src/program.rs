//! Program lifecycle and event loop.
//!
//! [`Program`] owns the terminal while a component is mounted: it enters raw
//! mode, turns crossterm events into messages, dispatches them through a
//! [`Mount`], and redraws whenever the laid-out frame changes.

use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use tracing::{debug, info};

use crate::command::{Cmd, run_to_messages};
use crate::component::Component;
use crate::key::{KeyType, from_crossterm_key};
use crate::message::{InterruptMsg, Message, QuitMsg, WindowSizeMsg};
use crate::mount::Mount;
use crate::mouse::from_crossterm_mouse;

/// Errors that can occur when running a program.
///
/// | Error Variant | Recovery Strategy |
/// |--------------|-------------------|
/// | [`Io`](Error::Io) | Check terminal availability, or report to user |
/// | [`RawMode`](Error::RawMode) | Run in an interactive terminal |
/// | [`AltScreen`](Error::AltScreen) | Disable the alternate screen option |
/// | [`EventPoll`](Error::EventPoll) | Terminal may be disconnected |
/// | [`Render`](Error::Render) | Output stream closed |
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O error during terminal operations.
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),

    /// Failed to enable or disable raw mode.
    ///
    /// Raw mode is required for reading single key presses. This typically
    /// means stdin is not a TTY.
    #[error("failed to {action} raw mode: {source}")]
    RawMode {
        /// Whether we were trying to enable or disable raw mode.
        action: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to enter or exit the alternate screen.
    #[error("failed to {action} alternate screen: {source}")]
    AltScreen {
        /// Whether we were trying to enter or exit the alt screen.
        action: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to poll for terminal events.
    #[error("failed to poll terminal events: {0}")]
    EventPoll(io::Error),

    /// Failed to write a frame to the output.
    #[error("failed to render view: {0}")]
    Render(io::Error),
}

/// A specialized [`Result`] type for teacup operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Program options.
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Use alternate screen buffer.
    pub alt_screen: bool,
    /// Capture mouse clicks.
    pub mouse: bool,
    /// Emit ANSI styling.
    pub color: bool,
    /// Use custom I/O (skip terminal setup and event polling).
    pub custom_io: bool,
    /// Target frames per second for the event loop.
    pub fps: u32,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            alt_screen: false,
            mouse: false,
            color: true,
            custom_io: false,
            fps: 60,
        }
    }
}

/// The main program runner.
///
/// # Example
///
/// ```rust,ignore
/// use teacup::Program;
///
/// let final_component = Program::new(MyComponent::default())
///     .with_alt_screen()
///     .with_mouse()
///     .run()?;
/// ```
pub struct Program<C: Component> {
    component: C,
    options: ProgramOptions,
    external_rx: Option<Receiver<Message>>,
}

impl<C: Component> Program<C> {
    /// Create a new program with the given component.
    pub fn new(component: C) -> Self {
        Self {
            component,
            options: ProgramOptions::default(),
            external_rx: None,
        }
    }

    /// Provide an external message receiver.
    ///
    /// Messages received on this channel are forwarded into the event loop.
    pub fn with_input_receiver(mut self, rx: Receiver<Message>) -> Self {
        self.external_rx = Some(rx);
        self
    }

    /// Use alternate screen buffer (full-screen mode).
    pub fn with_alt_screen(mut self) -> Self {
        self.options.alt_screen = true;
        self
    }

    /// Capture mouse events so clicks can activate buttons.
    pub fn with_mouse(mut self) -> Self {
        self.options.mouse = true;
        self
    }

    /// Render without ANSI styling.
    pub fn without_color(mut self) -> Self {
        self.options.color = false;
        self
    }

    /// Set the target frames per second.
    ///
    /// Default is 60 FPS. Valid range is 1-120 FPS.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.options.fps = fps.clamp(1, 120);
        self
    }

    /// Enable custom I/O mode (skip raw mode and crossterm polling).
    ///
    /// Events then only arrive through [`with_input_receiver`](Self::with_input_receiver).
    pub fn with_custom_io(mut self) -> Self {
        self.options.custom_io = true;
        self
    }

    /// The options the program will run with.
    pub fn options(&self) -> &ProgramOptions {
        &self.options
    }

    /// Run the program on stdout and return the final component.
    pub fn run(self) -> Result<C> {
        self.run_with_writer(io::stdout())
    }

    /// Run the program with a custom writer.
    pub fn run_with_writer<W: Write>(self, mut writer: W) -> Result<C> {
        let options = self.options.clone();

        if !options.custom_io {
            enable_raw_mode().map_err(|source| Error::RawMode {
                action: "enable",
                source,
            })?;
        }

        let result = Self::setup(&mut writer, &options).and_then(|()| self.event_loop(&mut writer));

        // Cleanup always runs, even if setup or the loop failed.
        if options.mouse {
            let _ = execute!(writer, DisableMouseCapture);
        }
        // The last frame stays on the main screen; end its line.
        if !options.alt_screen {
            let _ = write!(writer, "\r\n");
        }
        let _ = execute!(writer, Show);
        if options.alt_screen {
            let _ = execute!(writer, LeaveAlternateScreen);
        }
        if !options.custom_io {
            let _ = disable_raw_mode();
        }

        result
    }

    fn setup<W: Write>(writer: &mut W, options: &ProgramOptions) -> Result<()> {
        if options.alt_screen {
            execute!(writer, EnterAlternateScreen).map_err(|source| Error::AltScreen {
                action: "enter",
                source,
            })?;
        }
        execute!(writer, Hide)?;
        if options.mouse {
            execute!(writer, EnableMouseCapture)?;
        }
        Ok(())
    }

    fn event_loop<W: Write>(mut self, writer: &mut W) -> Result<C> {
        let (tx, rx): (Sender<Message>, Receiver<Message>) = mpsc::channel();

        // Forward external messages
        if let Some(ext_rx) = self.external_rx.take() {
            let tx_clone = tx.clone();
            thread::spawn(move || {
                while let Ok(msg) = ext_rx.recv() {
                    if tx_clone.send(msg).is_err() {
                        break;
                    }
                }
            });
        }

        if !self.options.custom_io {
            if let Ok((width, height)) = terminal::size() {
                let _ = tx.send(Message::new(WindowSizeMsg { width, height }));
            }
        }

        let mut mount = Mount::new(self.component);
        if let Some(cmd) = mount.mount() {
            Self::handle_command(cmd, tx.clone());
        }

        let mut last_frame = String::new();
        Self::render(&mount, self.options.color, writer, &mut last_frame)?;

        let frame_duration = Duration::from_secs_f64(1.0 / f64::from(self.options.fps));

        loop {
            if !self.options.custom_io
                && event::poll(frame_duration).map_err(Error::EventPoll)?
            {
                match event::read().map_err(Error::EventPoll)? {
                    Event::Key(key_event) => {
                        // Only handle key press events, not release
                        if key_event.kind == KeyEventKind::Press {
                            let key_msg = from_crossterm_key(key_event.code, key_event.modifiers);
                            if key_msg.key_type == KeyType::CtrlC {
                                let _ = tx.send(Message::new(InterruptMsg));
                            } else {
                                let _ = tx.send(Message::new(key_msg));
                            }
                        }
                    }
                    Event::Mouse(mouse_event) => {
                        let _ = tx.send(Message::new(from_crossterm_mouse(mouse_event)));
                    }
                    Event::Resize(width, height) => {
                        let _ = tx.send(Message::new(WindowSizeMsg { width, height }));
                    }
                    Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
                }
            }

            let mut needs_render = false;
            while let Ok(msg) = rx.try_recv() {
                if msg.is::<QuitMsg>() || msg.is::<InterruptMsg>() {
                    info!("quit requested, unmounting");
                    return Ok(mount.into_component());
                }

                let dispatched = mount.dispatch(msg);
                debug!(kind = ?dispatched.kind, "dispatched message");
                if let Some(cmd) = dispatched.cmd {
                    Self::handle_command(cmd, tx.clone());
                }
                needs_render = true;
            }

            if needs_render {
                Self::render(&mount, self.options.color, writer, &mut last_frame)?;
            }

            // Custom IO skips poll, so pace the loop here.
            if self.options.custom_io {
                thread::sleep(frame_duration);
            }
        }
    }

    fn handle_command(cmd: Cmd, tx: Sender<Message>) {
        thread::spawn(move || {
            for msg in run_to_messages(cmd) {
                if tx.send(msg).is_err() {
                    break;
                }
            }
        });
    }

    fn render<W: Write>(
        mount: &Mount<C>,
        color: bool,
        writer: &mut W,
        last_frame: &mut String,
    ) -> Result<()> {
        let frame = mount.frame(color);

        // Skip if the frame hasn't changed
        if frame == *last_frame {
            return Ok(());
        }

        execute!(writer, MoveTo(0, 0), Clear(ClearType::All)).map_err(Error::Render)?;
        // Raw mode doesn't translate \n into a carriage return.
        write!(writer, "{}", frame.replace('\n', "\r\n")).map_err(Error::Render)?;
        writer.flush().map_err(Error::Render)?;

        *last_frame = frame;
        Ok(())
    }
}
