//! Request middleware and guards.

pub mod auth;
