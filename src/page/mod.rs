//! Page module - rendering and DOM interaction for the landing page
//!
//! The flow logic only speaks to the page through the `PageView` and
//! `ControlView` traits; this module provides the shared helpers built on
//! those traits and the platform-specific implementations for WASM
//! (web-sys) and no-WASM (in-memory) environments.

pub mod busy;
pub mod errors;
pub mod flash;
pub mod render;

#[cfg(feature = "wasm")]
pub mod gloo;
#[cfg(feature = "wasm")]
pub use gloo::{DomControl, DomPage};

#[cfg(feature = "no-wasm")]
pub mod headless;
#[cfg(feature = "no-wasm")]
pub use headless::{HeadlessControl, HeadlessPage};
