//! WASM HTTP client implementation using gloo_net
//!
//! This module posts forms through the browser's fetch API. The body is
//! urlencoded with the browser's own `URLSearchParams`, so the payload
//! matches what a native form submission would have sent.

use gloo_net::http::Request;
use serde_json::Value;
use web_sys::UrlSearchParams;

use super::{AJAX_HEADER, AJAX_HEADER_VALUE, CSRF_HEADER};
use crate::error::{ErrorKind, Result};
use crate::interface::{HttpClient, SubmitApi};
use crate::model::dtos::{FormReply, SubmitParams};

/// HTTP client for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct WasmClient;

impl HttpClient for WasmClient {
    async fn new() -> Result<Self> {
        Ok(Self)
    }
}

impl WasmClient {
    fn encode_fields(fields: &[(String, String)]) -> Result<String> {
        let params = UrlSearchParams::new()
            .map_err(|_| ErrorKind::ParseError("URLSearchParams unavailable".to_string()))?;

        for (name, value) in fields {
            params.append(name, value);
        }

        Ok(String::from(params.to_string()))
    }
}

impl SubmitApi for WasmClient {
    async fn post_form(&self, params: &SubmitParams) -> Result<FormReply> {
        let body = Self::encode_fields(&params.fields)?;

        let resp = Request::post(&params.action)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header(CSRF_HEADER, &params.csrf_token)
            .header(AJAX_HEADER, AJAX_HEADER_VALUE)
            .body(body)?
            .send()
            .await?;

        let ok = resp.ok();
        let status = resp.status();
        let body = resp.json::<Value>().await?;

        Ok(FormReply { ok, status, body })
    }
}
