//! Request-scoped processing services

pub mod zip;
