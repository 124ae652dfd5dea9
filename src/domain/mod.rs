//! Domain layer containing the developer profile record and its value objects.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors)
//! - `developer` - Developer profile record and handle

pub mod developer;
pub mod foundation;
