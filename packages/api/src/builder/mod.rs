//! Fluent extraction builder
//!
//! Chains fallback paths, a policy and a default value over a borrowed
//! document, then resolves them with one terminal call.

pub mod chain;
pub mod core;
pub mod terminal;

pub use self::core::*;
