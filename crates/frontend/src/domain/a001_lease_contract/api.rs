use contracts::domain::a001_lease_contract::{Contract, ContractsResponse};
use gloo_net::http::Request;

/// База API бэкенда: тот же хост, что и у фронтенда, порт 8000
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Получить полный список договоров (состояние заменяется целиком)
pub async fn get_contracts() -> Result<Vec<Contract>, String> {
    let url = format!("{}/contracts", api_base());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: ContractsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.data)
}
