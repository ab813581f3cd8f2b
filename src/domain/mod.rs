//! Domain value objects and types.
//!
//! Type-safe wrappers for the dial codes and region codes that make up the
//! country dataset, plus digit normalization for raw phone input. Value
//! objects validate at construction time so the selector never carries a
//! malformed code.

pub mod dial_code;
pub mod errors;
pub mod phone;
pub mod region_code;

pub use dial_code::DialCode;
pub use errors::DomainError;
pub use phone::{normalize, PhoneDigits};
pub use region_code::RegionCode;
