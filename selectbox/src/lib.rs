//! Dropdown select widget: the interaction state machine behind a label,
//! an option overlay and mouse/keyboard selection.
//!
//! Rendering is left to the host. It feeds [`Event`]s into a
//! [`SelectWidget`], draws the [`SelectView`] it gets back and listens for
//! [`Signal`]s on a [`SignalReceiver`].

pub mod config;
pub mod error;
pub mod event;
pub mod option;
pub mod signal;
pub mod state;
pub mod view;
pub mod widget;

pub use config::SelectConfig;
pub use error::ConfigError;
pub use event::{Event, EventResult, Key};
pub use option::SelectOption;
pub use signal::{Signal, SignalReceiver};
pub use state::WidgetState;
pub use view::{OptionView, SelectView};
pub use widget::SelectWidget;
