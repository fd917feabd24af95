//! Client module - handles HTTP submissions for both WASM and no-WASM
//! environments
//!
//! This module provides a unified interface for posting forms while
//! supporting different implementations for WASM (gloo_net) and no-WASM
//! (reqwest) environments.

#[cfg(feature = "no-wasm")]
pub mod request;
#[cfg(feature = "no-wasm")]
pub use request::NativeClient;

#[cfg(feature = "wasm")]
pub mod gloo;
#[cfg(feature = "wasm")]
pub use gloo::WasmClient;

/// Header carrying the CSRF token expected by the server
pub const CSRF_HEADER: &str = "X-CSRFToken";
/// Header marking the request as script-initiated, so the server answers
/// with JSON instead of a rendered page
pub const AJAX_HEADER: &str = "X-Requested-With";
pub const AJAX_HEADER_VALUE: &str = "XMLHttpRequest";
