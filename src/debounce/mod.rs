//! Trailing-edge debouncing for the country search box.

pub mod debouncer;

pub use debouncer::Debouncer;
