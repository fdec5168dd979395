//! Data Transfer Objects for request/response serialization.

pub mod create;

pub use create::{CreateRequest, CreateResponse};
