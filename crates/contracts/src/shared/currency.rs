//! Нормализация денежных строк из извлечённых документов
//!
//! Бэкенд извлекает суммы как есть ("Rp 1.234.567,89", "IDR 5.000.000" и т.п.),
//! единого формата нет. Правило разбора зафиксировано тестами ниже:
//! оставляем цифры и запятые, первая запятая становится десятичной точкой,
//! читается самый длинный числовой префикс. Правило намеренно lossy для
//! строк с несколькими запятыми ("1,234,567" -> 1.234) — менять его можно
//! только вместе с таблицей тестов.

/// Разобрать денежную строку в число. Всегда возвращает значение:
/// для `None`, пустой или нечисловой строки — 0.0.
pub fn parse_currency(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };

    // Только цифры и запятые, первая запятая -> десятичная точка
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect();
    let normalized = cleaned.replacen(',', ".", 1);

    // Самый длинный префикс вида `цифры [. цифры]`, остальное игнорируется
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in normalized.char_indices() {
        if c.is_ascii_digit() {
            end = i + 1;
        } else if c == '.' && !seen_dot {
            seen_dot = true;
            end = i + 1;
        } else {
            break;
        }
    }

    normalized[..end]
        .trim_end_matches('.')
        .parse::<f64>()
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_garbage_input() {
        assert_eq!(parse_currency(None), 0.0);
        assert_eq!(parse_currency(Some("")), 0.0);
        assert_eq!(parse_currency(Some("abc")), 0.0);
        assert_eq!(parse_currency(Some("Rp -")), 0.0);
    }

    #[test]
    fn test_indonesian_grouping() {
        // Точки-разделители тысяч отбрасываются, запятая — десятичная
        assert_eq!(parse_currency(Some("Rp 1.234.567,89")), 1_234_567.89);
        assert_eq!(parse_currency(Some("IDR 5.000.000")), 5_000_000.0);
        // Суффикс ",-" (без копеек) даёт целую сумму
        assert_eq!(parse_currency(Some("Rp 2.500.000,-")), 2_500_000.0);
    }

    #[test]
    fn test_comma_decimal() {
        assert_eq!(parse_currency(Some("750,5")), 750.5);
        assert_eq!(parse_currency(Some(",5")), 0.5);
    }

    #[test]
    fn test_multi_comma_is_lossy_by_rule() {
        // Зафиксированное поведение: вторая запятая обрывает число
        assert_eq!(parse_currency(Some("1,234,567")), 1.234);
    }
}
