//! Core domain types
//!
//! These types represent the fundamental entities of a remote inference
//! job lifecycle as observed from the client side. They are independent
//! of the wire format; see `crate::dto` for the on-the-wire shapes.

pub mod health;
pub mod job;
