//! # Resolvers
//!
//! Map annotation records onto the typed operation model.

pub mod config;
pub mod operation;
pub mod response;

pub use config::ResolverConfig;
pub use operation::{resolve_operation, OperationResolver};
pub use response::{resolve_content_type, resolve_response};
