//! Business logic services.
//!
//! Services translate domain operations into storage calls, separated from
//! HTTP handlers so the two layers can evolve and be tested independently.

pub mod transaction_service;
