//! Custom extractors for Axum handlers.

pub mod json_body;
pub mod path_param;

pub use json_body::JsonBody;
pub use path_param::PathParam;
