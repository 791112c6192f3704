//! Агрегированные показатели по списку договоров
//!
//! Считается заново на каждый fetch по полному списку (O(договоры × файлы)),
//! инкрементальных обновлений нет. Плохая дата или сумма в одной записи
//! деградирует до 0 / исключения записи и никогда не роняет проход целиком.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_lease_contract::Contract;
use crate::shared::currency::parse_currency;

/// До скольких дней до конца окна договор считается "скоро истекает"
pub const DUE_SOON_WINDOW_DAYS: i64 = 30;

// ============================================================================
// Классификация строки таблицы
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaseState {
    Active,
    DueSoon,
    Inactive,
}

/// Статус договора на дату: активен / скоро истекает / неактивен.
/// Неразобранная граница окна даёт `Inactive`.
pub fn lease_state(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> LeaseState {
    match (start, end) {
        (Some(start), Some(end)) if today >= start && today <= end => {
            if (end - today).num_days() < DUE_SOON_WINDOW_DAYS {
                LeaseState::DueSoon
            } else {
                LeaseState::Active
            }
        }
        _ => LeaseState::Inactive,
    }
}

// ============================================================================
// Сводка дашборда
// ============================================================================

/// Выход агрегатора: три счётчика, сумма активных счетов, ближайший срок
/// оплаты и два упорядоченных списка предупреждений (порядок следования
/// договоров, без дополнительной сортировки).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaseMetrics {
    pub active_leases: u32,
    pub due_soon_leases: u32,
    pub overdue_leases: u32,

    /// Сумма last_invoice_amount по счетам активных договоров
    pub total_invoice_amount: f64,
    /// Минимальный срок оплаты >= сегодня; `None` — нет предстоящих счетов
    pub closest_invoice_due: Option<NaiveDate>,

    pub lease_warnings: Vec<String>,
    pub invoice_warnings: Vec<String>,
}

impl LeaseMetrics {
    pub fn compute(contracts: &[Contract], today: NaiveDate) -> Self {
        let mut metrics = Self::default();

        // Проход 1: счета активных договоров — общая сумма и ближайший срок
        for contract in contracts {
            if !contract.is_active(today) {
                continue;
            }
            for file in contract.contract_files.iter().filter(|f| f.is_invoice()) {
                metrics.total_invoice_amount +=
                    parse_currency(file.last_invoice_amount.as_deref());

                if let Some(due) = file.due_date() {
                    if due >= today {
                        metrics.closest_invoice_due = Some(
                            metrics
                                .closest_invoice_due
                                .map_or(due, |current| current.min(due)),
                        );
                    }
                }
            }
        }

        // Проход 2: счётчики и предупреждения; договоры в обработке
        // ещё не извлечены и пропускаются
        for contract in contracts {
            if contract.is_processing() {
                continue;
            }
            let name = &contract.location_name;

            match (contract.start(), contract.end()) {
                (Some(start), Some(end)) if today >= start && today <= end => {
                    metrics.active_leases += 1;
                    if (end - today).num_days() < DUE_SOON_WINDOW_DAYS {
                        metrics.due_soon_leases += 1;
                        metrics
                            .lease_warnings
                            .push(format!("{} is due soon ({})", name, end));
                    }
                }
                (_, Some(end)) if today > end => {
                    metrics.overdue_leases += 1;
                    metrics
                        .lease_warnings
                        .push(format!("{} is overdue ({})", name, end));
                }
                _ => {}
            }

            for file in contract.contract_files.iter().filter(|f| f.is_invoice()) {
                let Some(due) = file.due_date() else {
                    continue;
                };
                if today > due {
                    metrics
                        .invoice_warnings
                        .push(format!("{} has an overdue invoice ({})", name, due));
                } else if (due - today).num_days() < DUE_SOON_WINDOW_DAYS {
                    metrics
                        .invoice_warnings
                        .push(format!("{} has an invoice due soon ({})", name, due));
                }
            }
        }

        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_lease_contract::ContractFile;
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    fn contract(id: i64, name: &str, start: Option<&str>, end: Option<&str>) -> Contract {
        serde_json::from_str::<Contract>(&format!(
            r#"{{ "id": {id}, "location_name": "{name}" }}"#
        ))
        .map(|mut c| {
            c.start_date = start.map(str::to_string);
            c.end_date = end.map(str::to_string);
            c
        })
        .unwrap()
    }

    fn invoice(due: Option<&str>, amount: Option<&str>) -> ContractFile {
        let mut file: ContractFile =
            serde_json::from_str(r#"{ "document_type": "invoice" }"#).unwrap();
        file.last_invoice_due = due.map(str::to_string);
        file.last_invoice_amount = amount.map(str::to_string);
        file
    }

    fn date(offset_days: i64) -> String {
        let base = today();
        let date = if offset_days >= 0 {
            base.checked_add_days(Days::new(offset_days as u64)).unwrap()
        } else {
            base.checked_sub_days(Days::new((-offset_days) as u64)).unwrap()
        };
        date.to_string()
    }

    #[test]
    fn test_active_window_is_inclusive_on_both_bounds() {
        let starts_today = contract(1, "A", Some(&date(0)), Some(&date(100)));
        let ends_today = contract(2, "B", Some(&date(-100)), Some(&date(0)));

        let m = LeaseMetrics::compute(&[starts_today, ends_today], today());
        assert_eq!(m.active_leases, 2);
        assert_eq!(m.overdue_leases, 0);
    }

    #[test]
    fn test_due_soon_boundary_is_strict_30_days() {
        let due_soon = contract(1, "A", Some(&date(-10)), Some(&date(29)));
        let plain_active = contract(2, "B", Some(&date(-10)), Some(&date(30)));

        let m = LeaseMetrics::compute(&[due_soon, plain_active], today());
        assert_eq!(m.active_leases, 2);
        assert_eq!(m.due_soon_leases, 1);
        assert_eq!(m.lease_warnings, vec![format!("A is due soon ({})", date(29))]);
    }

    #[test]
    fn test_overdue_contract() {
        let overdue = contract(1, "A", Some(&date(-400)), Some(&date(-1)));

        let m = LeaseMetrics::compute(&[overdue], today());
        assert_eq!(m.active_leases, 0);
        assert_eq!(m.overdue_leases, 1);
        assert_eq!(m.lease_warnings, vec![format!("A is overdue ({})", date(-1))]);
    }

    #[test]
    fn test_closest_due_is_min_of_future_dates() {
        let mut c = contract(1, "A", Some(&date(-10)), Some(&date(200)));
        c.contract_files = vec![
            invoice(Some(&date(5)), None),
            invoice(Some(&date(2)), None),
            invoice(Some(&date(-1)), None),
        ];

        let m = LeaseMetrics::compute(&[c], today());
        assert_eq!(m.closest_invoice_due, parse_expected(&date(2)));
    }

    fn parse_expected(raw: &str) -> Option<NaiveDate> {
        crate::shared::dates::parse_date(raw)
    }

    #[test]
    fn test_no_upcoming_invoices_yields_sentinel() {
        let mut c = contract(1, "A", Some(&date(-10)), Some(&date(200)));
        c.contract_files = vec![invoice(Some(&date(-3)), Some("Rp 100.000"))];

        let m = LeaseMetrics::compute(&[c], today());
        assert_eq!(m.closest_invoice_due, None);
        // Сумма при этом учитывается: счёт принадлежит активному договору
        assert_eq!(m.total_invoice_amount, 100_000.0);
    }

    #[test]
    fn test_total_skips_invoices_of_inactive_contracts() {
        let mut active = contract(1, "A", Some(&date(-10)), Some(&date(200)));
        active.contract_files = vec![invoice(Some(&date(3)), Some("Rp 1.500.000,50"))];

        let mut expired = contract(2, "B", Some(&date(-400)), Some(&date(-100)));
        expired.contract_files = vec![invoice(Some(&date(3)), Some("Rp 9.000.000"))];

        let m = LeaseMetrics::compute(&[active, expired], today());
        assert_eq!(m.total_invoice_amount, 1_500_000.5);
    }

    #[test]
    fn test_processing_contracts_are_skipped_in_second_pass() {
        let mut processing = contract(1, "A", Some(&date(-10)), Some(&date(5)));
        processing.status = Some("Processing".to_string());
        processing.contract_files = vec![invoice(Some(&date(1)), None)];

        let m = LeaseMetrics::compute(&[processing], today());
        assert_eq!(m.active_leases, 0);
        assert!(m.lease_warnings.is_empty());
        assert!(m.invoice_warnings.is_empty());
    }

    #[test]
    fn test_invoice_warnings_overdue_and_due_soon() {
        let mut c = contract(1, "A", Some(&date(-10)), Some(&date(200)));
        c.contract_files = vec![
            invoice(Some(&date(-2)), None),
            invoice(Some(&date(10)), None),
            invoice(Some(&date(90)), None),
        ];

        let m = LeaseMetrics::compute(&[c], today());
        assert_eq!(
            m.invoice_warnings,
            vec![
                format!("A has an overdue invoice ({})", date(-2)),
                format!("A has an invoice due soon ({})", date(10)),
            ]
        );
    }

    #[test]
    fn test_malformed_record_degrades_without_aborting() {
        let mut broken = contract(1, "Broken", Some("??"), Some("not a date"));
        broken.contract_files = vec![invoice(Some("soon"), Some("N/A"))];
        let healthy = contract(2, "Healthy", Some(&date(-1)), Some(&date(60)));

        let m = LeaseMetrics::compute(&[broken, healthy], today());
        assert_eq!(m.active_leases, 1);
        assert_eq!(m.overdue_leases, 0);
        assert_eq!(m.total_invoice_amount, 0.0);
        assert!(m.invoice_warnings.is_empty());
    }

    #[test]
    fn test_warnings_preserve_contract_order() {
        let first = contract(1, "First", Some(&date(-10)), Some(&date(1)));
        let second = contract(2, "Second", Some(&date(-10)), Some(&date(2)));

        let m = LeaseMetrics::compute(&[first, second], today());
        assert_eq!(
            m.lease_warnings,
            vec![
                format!("First is due soon ({})", date(1)),
                format!("Second is due soon ({})", date(2)),
            ]
        );
    }

    #[test]
    fn test_lease_state_classification() {
        let t = today();
        let d = |s: &str| crate::shared::dates::parse_date(s);

        assert_eq!(lease_state(d(&date(-10)), d(&date(60)), t), LeaseState::Active);
        assert_eq!(lease_state(d(&date(-10)), d(&date(29)), t), LeaseState::DueSoon);
        assert_eq!(lease_state(d(&date(-10)), d(&date(-1)), t), LeaseState::Inactive);
        assert_eq!(lease_state(None, d(&date(60)), t), LeaseState::Inactive);
        assert_eq!(lease_state(d("junk"), d(&date(60)), t), LeaseState::Inactive);
    }
}
