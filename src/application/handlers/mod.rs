//! Application handlers - one module per bounded context.

pub mod developer;
