//! Shared HTTP response handling.
//!
//! Non-success responses become [`ClientError::Api`], carrying the server's
//! `{ "message": ... }` text when the body has one.

use kotoba_core::responses::MessageResponse;

use crate::error::ClientError;

/// Return the response unchanged on success, or an `Api` error otherwise.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        message: extract_message(&body),
    })
}

fn extract_message(body: &str) -> String {
    serde_json::from_str::<MessageResponse>(body)
        .map_or_else(|_| body.to_string(), |m| m.message)
}
