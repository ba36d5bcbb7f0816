pub mod analytics;

use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use web_sys::FormData;

use crate::settings;

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// POST a JSON body and parse the JSON response
pub async fn post_json<T, B>(endpoint: &str, body: &B) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?;

    parse_response(endpoint, response).await
}

/// POST browser form data as multipart; the browser picks the boundary
pub async fn post_form<T>(endpoint: &str, form_data: FormData) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = api_url(endpoint);
    log::debug!("POST (multipart) request to: {}", url);

    let response = Request::post(&url)
        .body(form_data)
        .map_err(|e| {
            let error_msg = format!("Failed to build request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?;

    parse_response(endpoint, response).await
}

async fn parse_response<T>(endpoint: &str, response: Response) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    if !response.ok() {
        log::warn!("POST {} - Non-OK response: {}", endpoint, response.status());
        // The analytics service answers errors with a short plain-text body
        let error_msg = match response.text().await {
            Ok(body) if !body.trim().is_empty() => {
                format!("HTTP error {}: {}", response.status(), body.trim())
            }
            _ => format!("HTTP error: {}", response.status()),
        };
        log::error!("POST {} - {}", endpoint, error_msg);
        return Err(error_msg);
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    let result = response.json::<T>().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("POST {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("POST {} - Success", endpoint);
    Ok(result)
}
