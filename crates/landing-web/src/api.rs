//! API Client

use phrase_core::{PreviewError, PreviewPhrase};

const PREVIEW_PATH: &str = "/api/preview";

/// Absolute URL of the preview endpoint for the given page origin
fn preview_url(origin: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), PREVIEW_PATH)
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into())
}

/// Ask the server for one preview phrase.
///
/// Transport errors, non-2xx answers and bad payloads all come back as
/// `Err`; the body is validated with the same rules the server uses.
pub async fn fetch_preview() -> Result<PreviewPhrase, PreviewError> {
    let client = reqwest::Client::new();

    let response = client
        .post(preview_url(&page_origin()))
        .send()
        .await
        .map_err(|e| PreviewError::Provider(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| PreviewError::Provider(e.to_string()))?;

    if !status.is_success() {
        return Err(PreviewError::Status {
            status: status.as_u16(),
            body,
        });
    }

    PreviewPhrase::from_json(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_url() {
        assert_eq!(preview_url("https://jeparle.ru"), "https://jeparle.ru/api/preview");
        assert_eq!(preview_url("http://localhost:3000/"), "http://localhost:3000/api/preview");
    }
}
