//! Decorative sea-and-gulls backdrop for the landing page hero.
//!
//! This crate is compiled to WebAssembly and runs in the browser. The scene
//! model is plain Rust and testable natively; only [`render`] and
//! [`engine::Engine`] touch the DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`scene`] | Wave and bird state, per-frame stepping, bounds |
//! | [`engine`] | Binds a scene to an `HtmlCanvasElement` |
//! | [`render`] | Draws a scene to a 2D context |
//! | [`consts`] | Palette and motion constants |

pub mod consts;
pub mod engine;
pub mod render;
pub mod scene;
