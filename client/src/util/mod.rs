//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser access (`dom`, `frame_loop`, the `clock` readers) is isolated here
//! and gated on `hydrate`, so page and component logic stays testable natively.

pub mod clock;
#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod frame_loop;
pub mod task;
pub mod text;
