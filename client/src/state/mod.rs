//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page concern (`countdown`, `header`, `timetable`) around
//! the read-only `schedule` data so each component depends on a small model.
//! All of it is plain Rust and testable without a browser.

pub mod countdown;
pub mod header;
pub mod schedule;
pub mod timetable;
