//! HTTP request handlers for API endpoints.

pub mod create;
pub mod redirect;

pub use create::create_handler;
pub use redirect::redirect_handler;
