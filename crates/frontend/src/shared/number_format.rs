//! Утилиты форматирования денежных значений
//!
//! Суммы отображаются в индонезийской локали: точка — разделитель тысяч,
//! запятая — десятичная ("IDR 1.234.567,89").

/// Форматирует число с разделителем тысяч (точка) и указанным количеством
/// знаков после запятой (запятая как десятичный разделитель)
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        _ => format!("{:.2}", value), // По умолчанию 2 знака
    };

    // Разделяем целую и дробную части
    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // Вставляем точки каждые 3 цифры с конца целой части
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push('.');
        }
        result.push(*c);
    }

    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{},{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Денежное значение IDR: без копеек для целых сумм, иначе с двумя знаками
pub fn format_idr(value: f64) -> String {
    if value.fract() == 0.0 {
        format_number_with_decimals(value, 0)
    } else {
        format_number_with_decimals(value, 2)
    }
}
