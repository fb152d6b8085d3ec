//! Publishing figures and model values to whatever displays them.
//!
//! The display side is a set of named, write-only slots. The core never
//! reads them back.

mod publisher;
mod recording;
pub mod targets;

pub use publisher::Publisher;
pub use recording::RecordingSink;

/// Visual state of a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleState {
    /// Highlighted: costs, and profits below zero.
    Alert,
    Normal,
}

impl StyleState {
    pub fn alert_if(condition: bool) -> Self {
        if condition { Self::Alert } else { Self::Normal }
    }
}

/// Receiver of published text and style states.
pub trait PresentationSink {
    /// Sets the text of the display slot `target`.
    fn set_text(
        &mut self,
        target: &str,
        text: &str,
    );

    /// Flags the display slot `target` with a style state.
    fn set_style(
        &mut self,
        target: &str,
        style: StyleState,
    );

    /// Shows the current value of the editable field at `path`.
    fn set_input(
        &mut self,
        path: &str,
        value: &str,
    );
}
