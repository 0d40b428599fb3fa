//! Residential parking management backend.
//!
//! Exposed as a library so the server binary and the admin bootstrap binary
//! share the same modules.

pub mod model;
pub mod server;
