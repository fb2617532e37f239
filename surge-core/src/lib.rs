//! Surge Core
//!
//! Core types for the Surge serverless inference client.
//!
//! This crate contains:
//! - Domain types: Core entities (Job, JobState, HealthSnapshot, etc.)
//! - DTOs: Wire-format objects exchanged with the endpoint API

pub mod domain;
pub mod dto;
