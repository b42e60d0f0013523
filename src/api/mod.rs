//! API Client
//!
//! HTTP client wrapper for the GymRec REST API.

pub mod client;
pub mod query;

pub use client::*;
