use contracts::usecases::u101_upload_document::{
    LeaseStatusResponse, UploadErrorBody, UploadResponse,
};
use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::FormData;

use crate::domain::a001_lease_contract::api::api_base;

/// Проба статуса задачи извлечения
pub async fn get_lease_status(lease_id: i64) -> Result<LeaseStatusResponse, String> {
    let url = format!("{}/contracts/{}", api_base(), lease_id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: LeaseStatusResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Загрузить один файл (multipart, поле "file").
/// Для не-2xx ответа возвращается detail из тела, если бэкенд его прислал.
pub async fn upload_file(file: web_sys::File) -> Result<UploadResponse, String> {
    use web_sys::{Request as WebRequest, RequestInit, RequestMode, Response};

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let url = format!("{}/upload", api_base());
    let request = WebRequest::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;

    if !resp.ok() {
        let detail = serde_json::from_str::<UploadErrorBody>(&text)
            .map(|body| body.detail)
            .unwrap_or_else(|_| format!("HTTP {}", resp.status()));
        return Err(detail);
    }

    let data: UploadResponse = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;

    Ok(data)
}
