//! HTTP service uploading a report to the analysis endpoint.

use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::config::UPLOAD_FIELD;
use crate::types::{AnalysisResponse, AnalysisResult, ResponseFormat, UploadError, UploadResult};

/// Upload a file as multipart form data and return the analysis.
pub async fn upload_report(
    file: &File,
    endpoint: &str,
    format: ResponseFormat,
) -> UploadResult<AnalysisResult> {
    let form_data = FormData::new().map_err(|e| UploadError::FormData(js_error_message(&e)))?;
    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(|e| UploadError::FormData(js_error_message(&e)))?;

    log::info!("📤 Uploading {} ({} bytes) to {}", file.name(), file.size(), endpoint);

    let response = Request::post(endpoint)
        .body(form_data)
        .map_err(|e| UploadError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| UploadError::Network(e.to_string()))?;

    if !response.ok() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(UploadError::Server {
            status: response.status(),
            body,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| UploadError::Network(e.to_string()))?;

    let result = parse_analysis(&body, format)?;
    log::info!("📋 Analysis received ({} chars)", result.text.chars().count());
    Ok(result)
}

/// Decode a successful response body according to the configured contract.
pub fn parse_analysis(body: &str, format: ResponseFormat) -> UploadResult<AnalysisResult> {
    match format {
        ResponseFormat::Json => serde_json::from_str::<AnalysisResponse>(body)
            .map(|response| AnalysisResult::new(response.analysis))
            .map_err(|e| UploadError::Decode(e.to_string())),
        ResponseFormat::PlainText => Ok(AnalysisResult::new(body)),
    }
}

/// Best-effort text of a JS exception.
pub fn js_error_message(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
