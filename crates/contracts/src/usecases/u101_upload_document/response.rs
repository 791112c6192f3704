use serde::{Deserialize, Serialize};

/// Успешный ответ `POST /upload`: бэкенд создал запись договора
/// в статусе "processing" и запустил фоновое извлечение
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub lease_id: i64,
}

/// Тело не-2xx ответа `POST /upload`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadErrorBody {
    pub detail: String,
}
