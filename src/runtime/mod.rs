//! Synchronous session layer coupling mutations to durable writes.

/// Session wrapper over scheduler plus slot.
pub mod session;
