//! Phone input widget controller and event loop.
//!
//! [`PhoneInputWidget`] owns one country selector and one phone validator and
//! routes UI events between them. [`run_widget`] drives a widget from an event
//! channel, one event at a time, with the search debounce as its only timer.

pub mod controller;
pub mod events;
pub mod runtime;
pub mod view;

pub use controller::{PhoneInputWidget, SubmittedPhone};
pub use events::WidgetEvent;
pub use runtime::run_widget;
pub use view::{SelectedCountryView, WidgetView};
