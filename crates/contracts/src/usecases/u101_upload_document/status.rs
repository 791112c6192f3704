use serde::{Deserialize, Serialize};

/// Статус фоновой задачи извлечения (`GET /contracts/{lease_id}`).
///
/// Терминальные статусы — Completed и Failed; незнакомое значение статуса
/// трактуется как нетерминальное, чтобы новый статус на бэкенде не
/// останавливал опрос раньше времени.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaseJobStatus {
    Pending,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl LeaseJobStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, LeaseJobStatus::Completed | LeaseJobStatus::Failed)
    }
}

/// Ответ пробы статуса; остальные поля ответа для опроса не нужны
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaseStatusResponse {
    pub status: LeaseJobStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_statuses() {
        let decode = |json: &str| {
            serde_json::from_str::<LeaseStatusResponse>(json)
                .unwrap()
                .status
        };
        assert_eq!(decode(r#"{"status":"pending"}"#), LeaseJobStatus::Pending);
        assert_eq!(decode(r#"{"status":"completed"}"#), LeaseJobStatus::Completed);
        assert_eq!(decode(r#"{"status":"failed"}"#), LeaseJobStatus::Failed);
    }

    #[test]
    fn test_unknown_status_is_not_terminal() {
        let resp: LeaseStatusResponse =
            serde_json::from_str(r#"{"status":"queued","extra":42}"#).unwrap();
        assert_eq!(resp.status, LeaseJobStatus::Unknown);
        assert!(!resp.status.is_terminal());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(LeaseJobStatus::Completed.is_terminal());
        assert!(LeaseJobStatus::Failed.is_terminal());
        assert!(!LeaseJobStatus::Pending.is_terminal());
    }
}
