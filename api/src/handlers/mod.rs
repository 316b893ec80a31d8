pub mod error_handler;

pub use error_handler::{handle_session_error, json_error_handler, status_for};
