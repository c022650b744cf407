//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections render in page order from static copy and the schedule data.
//! Shared state comes from Leptos context (`TimetableState`) or props
//! (the countdown signal owned by the landing page).

pub mod about;
pub mod floating_header;
pub mod hero;
pub mod registration;
pub mod session_card;
pub mod site_footer;
pub mod timetable;
pub mod venue;
pub mod wave_backdrop;
