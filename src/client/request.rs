//! No-WASM HTTP client implementation using reqwest
//!
//! Posts forms the way the in-page script does: form-encoded body, CSRF
//! token header, script-initiated marker header. The cookie store keeps the
//! server's CSRF cookie paired with the token field across requests.

use reqwest::Client;
use serde_json::Value;

use super::{AJAX_HEADER, AJAX_HEADER_VALUE, CSRF_HEADER};
use crate::error::Result;
use crate::interface::{HttpClient, SubmitApi};
use crate::model::dtos::{FormReply, SubmitParams};

/// HTTP client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct NativeClient {
    client: Client,
}

impl HttpClient for NativeClient {
    async fn new() -> Result<Self> {
        let client = Client::builder().cookie_store(true).build()?;

        Ok(Self { client })
    }
}

impl NativeClient {
    /// Fetch a page body; used to prime the CSRF cookie and scrape the token
    pub async fn get_page(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send().await?;
        Ok(resp.text().await?)
    }
}

impl SubmitApi for NativeClient {
    async fn post_form(&self, params: &SubmitParams) -> Result<FormReply> {
        let resp = self
            .client
            .post(&params.action)
            .header(CSRF_HEADER, &params.csrf_token)
            .header(AJAX_HEADER, AJAX_HEADER_VALUE)
            .form(&params.fields)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.json::<Value>().await?;

        Ok(FormReply {
            ok: status.is_success(),
            status: status.as_u16(),
            body,
        })
    }
}
