pub mod mock_phone_library;

pub use mock_phone_library::MockPhoneLibrary;
