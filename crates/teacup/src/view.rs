//! UI descriptions.
//!
//! A [`View`] is what a component's `view` returns: an ordered list of
//! headings, text lines and buttons. It is data, not output. The runtime lays
//! it out one node per line and keeps it around so that key presses and
//! mouse clicks can find the button they activate.

use std::fmt;
use std::sync::Arc;

use crossterm::style::Stylize;

use crate::message::Message;

/// Callback run when a button is activated.
///
/// Returning a message hands it to the owning component's `update`;
/// returning `None` means the handler did its work itself (for example by
/// setting hook state).
pub type Handler = Arc<dyn Fn() -> Option<Message> + Send + Sync>;

/// An activatable control with a label.
#[derive(Clone)]
pub struct Button {
    label: String,
    on_activate: Handler,
}

impl Button {
    /// The text shown on the button.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Run the button's handler.
    pub fn activate(&self) -> Option<Message> {
        (self.on_activate)()
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// A single line of a [`View`].
#[derive(Debug, Clone)]
pub enum Node {
    /// Section title.
    Heading(String),
    /// Plain text.
    Text(String),
    /// Activatable control.
    Button(Button),
    /// Empty line.
    Spacer,
}

/// Layout options for [`View::render`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit ANSI styling for headings and the focused button.
    pub color: bool,
    /// Index of the focused button, if any.
    pub focus: Option<usize>,
}

/// A UI description built from headings, text and buttons.
///
/// # Example
///
/// ```rust
/// use teacup::{Message, View};
///
/// struct Clicked;
///
/// let view = View::new()
///     .heading("Demo")
///     .text("Count: 0")
///     .button("Increment", || Some(Message::new(Clicked)));
///
/// assert_eq!(view.button_labels(), vec!["Increment"]);
/// assert!(view.to_plain_string().contains("Count: 0"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct View {
    nodes: Vec<Node>,
}

impl View {
    /// Create an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a heading line.
    #[must_use]
    pub fn heading(mut self, text: impl Into<String>) -> Self {
        self.nodes.push(Node::Heading(text.into()));
        self
    }

    /// Add a text line.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.nodes.push(Node::Text(text.into()));
        self
    }

    /// Add a button running `on_activate` when activated.
    #[must_use]
    pub fn button<F>(mut self, label: impl Into<String>, on_activate: F) -> Self
    where
        F: Fn() -> Option<Message> + Send + Sync + 'static,
    {
        self.nodes.push(Node::Button(Button {
            label: label.into(),
            on_activate: Arc::new(on_activate),
        }));
        self
    }

    /// Add an empty line.
    #[must_use]
    pub fn spacer(mut self) -> Self {
        self.nodes.push(Node::Spacer);
        self
    }

    /// Append all nodes of `other` after this view's nodes.
    #[must_use]
    pub fn append(mut self, other: View) -> Self {
        self.nodes.extend(other.nodes);
        self
    }

    /// Wrap every message produced by this view's buttons with `f`.
    ///
    /// Parents use this to tag child messages so they can route them back
    /// to the child that rendered the button.
    #[must_use]
    pub fn map<F>(self, f: F) -> Self
    where
        F: Fn(Message) -> Message + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        let nodes = self
            .nodes
            .into_iter()
            .map(|node| match node {
                Node::Button(Button { label, on_activate }) => {
                    let f = Arc::clone(&f);
                    Node::Button(Button {
                        label,
                        on_activate: Arc::new(move || on_activate().map(|msg| f(msg))),
                    })
                }
                other => other,
            })
            .collect();
        Self { nodes }
    }

    /// All nodes in display order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Iterate over the buttons in display order.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Button(button) => Some(button),
            _ => None,
        })
    }

    /// The button at `index` in display order.
    pub fn button_at(&self, index: usize) -> Option<&Button> {
        self.buttons().nth(index)
    }

    /// Number of buttons in the view.
    pub fn button_count(&self) -> usize {
        self.buttons().count()
    }

    /// Labels of all buttons in display order.
    pub fn button_labels(&self) -> Vec<&str> {
        self.buttons().map(Button::label).collect()
    }

    /// Contents of all text lines in display order.
    pub fn texts(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The index of the button laid out on `row`, if that row holds one.
    pub fn button_at_row(&self, row: u16) -> Option<usize> {
        let row = usize::from(row);
        match self.nodes.get(row)? {
            Node::Button(_) => Some(
                self.nodes[..row]
                    .iter()
                    .filter(|node| matches!(node, Node::Button(_)))
                    .count(),
            ),
            _ => None,
        }
    }

    /// Lay the view out as text, one node per line.
    pub fn render(&self, options: &RenderOptions) -> String {
        let mut button_index = 0;
        let lines: Vec<String> = self
            .nodes
            .iter()
            .map(|node| match node {
                Node::Heading(text) if options.color => {
                    text.clone().bold().underlined().to_string()
                }
                Node::Heading(text) | Node::Text(text) => text.clone(),
                Node::Spacer => String::new(),
                Node::Button(button) => {
                    let focused = options.focus == Some(button_index);
                    button_index += 1;
                    let face = format!("[ {} ]", button.label);
                    match (focused, options.color) {
                        (true, true) => format!("> {}", face.reverse()),
                        (true, false) => format!("> {face}"),
                        (false, _) => format!("  {face}"),
                    }
                }
            })
            .collect();
        lines.join("\n")
    }

    /// Render without color or focus marker.
    pub fn to_plain_string(&self) -> String {
        self.render(&RenderOptions::default())
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping;
    struct Wrapped(Message);

    fn sample() -> View {
        View::new()
            .heading("Title")
            .text("Count: 0")
            .button("First", || Some(Message::new(Ping)))
            .spacer()
            .button("Second", || None)
    }

    #[test]
    fn test_plain_layout() {
        assert_eq!(
            sample().to_plain_string(),
            "Title\nCount: 0\n  [ First ]\n\n  [ Second ]"
        );
    }

    #[test]
    fn test_focus_marker() {
        let text = sample().render(&RenderOptions {
            color: false,
            focus: Some(1),
        });
        assert!(text.contains("  [ First ]"));
        assert!(text.contains("> [ Second ]"));
    }

    #[test]
    fn test_color_heading_is_styled() {
        let text = sample().render(&RenderOptions {
            color: true,
            focus: None,
        });
        assert!(text.contains('\u{1b}'));
        assert!(text.contains("Title"));
    }

    #[test]
    fn test_buttons_and_texts() {
        let view = sample();
        assert_eq!(view.button_count(), 2);
        assert_eq!(view.button_labels(), vec!["First", "Second"]);
        assert_eq!(view.texts(), vec!["Count: 0"]);
        assert!(view.button_at(2).is_none());
    }

    #[test]
    fn test_button_activation() {
        let view = sample();
        assert!(view.button_at(0).unwrap().activate().unwrap().is::<Ping>());
        assert!(view.button_at(1).unwrap().activate().is_none());
    }

    #[test]
    fn test_button_at_row() {
        let view = sample();
        assert_eq!(view.button_at_row(0), None);
        assert_eq!(view.button_at_row(2), Some(0));
        assert_eq!(view.button_at_row(3), None);
        assert_eq!(view.button_at_row(4), Some(1));
        assert_eq!(view.button_at_row(40), None);
    }

    #[test]
    fn test_map_wraps_messages() {
        let view = sample().map(|msg| Message::new(Wrapped(msg)));
        let msg = view.button_at(0).unwrap().activate().unwrap();
        let Wrapped(inner) = msg.downcast::<Wrapped>().unwrap();
        assert!(inner.is::<Ping>());

        // Handlers that produce nothing stay silent after mapping.
        assert!(view.button_at(1).unwrap().activate().is_none());
    }

    #[test]
    fn test_append_keeps_order() {
        let view = View::new().text("a").append(View::new().text("b"));
        assert_eq!(view.texts(), vec!["a", "b"]);
    }
}
