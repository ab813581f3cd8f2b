//! Phone-number validation and formatting.
//!
//! The parsing rules live in an external library reached through the
//! [`PhoneNumberLibrary`] trait; [`PhoneValidator`] layers the widget's
//! Empty/Invalid/Valid state machine on top of it.

pub mod library;
pub mod validator;

pub use library::{LibPhoneNumber, PhoneNumberLibrary};
pub use validator::PhoneValidator;
