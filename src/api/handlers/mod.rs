//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a single endpoint.

pub mod erase;
pub mod health;
pub mod redirect;
pub mod save;

pub use erase::erase_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use save::save_handler;
