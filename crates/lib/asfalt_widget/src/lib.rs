//! # asfalt_widget
//!
//! Client side of the Asfaltios support chat: the widget's state machine and
//! the HTTP client it uses to reach the relay.

pub mod relay;
pub mod widget;

pub use relay::{HttpRelay, Relay, WidgetError};
pub use widget::{ChatWidget, SendOutcome};
