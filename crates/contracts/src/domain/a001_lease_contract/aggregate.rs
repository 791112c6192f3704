use serde::{Deserialize, Serialize};

use super::info::InfoValue;
use crate::shared::dates::{parse_date, parse_datetime};
use chrono::{NaiveDate, NaiveDateTime};

// ============================================================================
// Wire DTOs (GET /contracts)
// ============================================================================

/// Ответ бэкенда на `GET /contracts`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractsResponse {
    pub data: Vec<Contract>,
}

/// Договор аренды: локация с валидным окном дат и набором документов.
///
/// Все поля, заполняемые извлечением из PDF, опциональны — до завершения
/// обработки (status == "processing") бэкенд отдаёт строку-заглушку.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Стабильный идентификатор записи в БД бэкенда. По нему же
    /// трекается задача извлечения (lease_id из POST /upload).
    pub id: i64,

    #[serde(default)]
    pub location_name: String,
    #[serde(default)]
    pub location_address: Option<String>,

    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,

    #[serde(default)]
    pub cooperation_type: Option<String>,
    #[serde(default)]
    pub payment_terms: Option<String>,
    #[serde(default)]
    pub monthly_cost_amount: Option<String>,
    #[serde(default)]
    pub security_deposit_amount: Option<String>,

    #[serde(default)]
    pub last_invoice_due: Option<String>,
    #[serde(default)]
    pub last_invoice_amount: Option<String>,

    #[serde(default)]
    pub additional_info: Option<InfoValue>,

    /// Свободный текст; "processing" (без учёта регистра) — сентинел
    /// "извлечение ещё не завершено"
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub contract_files: Vec<ContractFile>,
}

impl Contract {
    pub fn is_processing(&self) -> bool {
        self.status
            .as_deref()
            .map(|s| s.eq_ignore_ascii_case("processing"))
            .unwrap_or(false)
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start_date.as_deref().and_then(parse_date)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end_date.as_deref().and_then(parse_date)
    }

    /// Окно действия содержит дату (границы включительно).
    /// Неразобранная граница делает договор неактивным.
    pub fn is_active(&self, today: NaiveDate) -> bool {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => today >= start && today <= end,
            _ => false,
        }
    }
}

/// Один загруженный/извлечённый документ договора
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractFile {
    /// "invoice" — счёт; любой другой тип трактуется как соглашение
    #[serde(default)]
    pub document_type: String,
    #[serde(default)]
    pub uploaded_at: Option<String>,

    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,

    #[serde(default)]
    pub cooperation_type: Option<String>,
    #[serde(default)]
    pub payment_terms: Option<String>,
    #[serde(default)]
    pub monthly_cost_amount: Option<String>,
    #[serde(default)]
    pub security_deposit_amount: Option<String>,

    #[serde(default)]
    pub last_invoice_due: Option<String>,
    #[serde(default)]
    pub last_invoice_amount: Option<String>,

    #[serde(default)]
    pub additional_info: Option<InfoValue>,

    #[serde(default)]
    pub file_url: Option<String>,
}

impl ContractFile {
    pub fn is_invoice(&self) -> bool {
        self.document_type == "invoice"
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.last_invoice_due.as_deref().and_then(parse_date)
    }

    pub fn uploaded_at_datetime(&self) -> Option<NaiveDateTime> {
        self.uploaded_at.as_deref().and_then(parse_datetime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json() -> &'static str {
        r#"{
            "id": 7,
            "location_name": "Mall Kelapa Gading",
            "status": "Processing",
            "contract_files": []
        }"#
    }

    #[test]
    fn test_deserialize_minimal_contract() {
        let contract: Contract = serde_json::from_str(minimal_json()).unwrap();
        assert_eq!(contract.id, 7);
        assert!(contract.is_processing());
        assert!(contract.start_date.is_none());
        assert!(contract.contract_files.is_empty());
    }

    #[test]
    fn test_is_active_requires_both_bounds() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let mut contract: Contract = serde_json::from_str(minimal_json()).unwrap();

        contract.start_date = Some("2025-01-01".to_string());
        assert!(!contract.is_active(today));

        contract.end_date = Some("2025-12-31".to_string());
        assert!(contract.is_active(today));

        contract.end_date = Some("mangled".to_string());
        assert!(!contract.is_active(today));
    }

    #[test]
    fn test_invoice_detection_is_exact() {
        let mut file = ContractFile {
            document_type: "invoice".to_string(),
            uploaded_at: None,
            start_date: None,
            end_date: None,
            cooperation_type: None,
            payment_terms: None,
            monthly_cost_amount: None,
            security_deposit_amount: None,
            last_invoice_due: None,
            last_invoice_amount: None,
            additional_info: None,
            file_url: None,
        };
        assert!(file.is_invoice());

        // Всё, что не "invoice", трактуется единообразно как соглашение
        file.document_type = "letter_of_intent".to_string();
        assert!(!file.is_invoice());
    }
}
