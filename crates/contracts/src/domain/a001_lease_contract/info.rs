use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Произвольные извлечённые поля документа (additional_info).
///
/// Бэкенд кладёт сюда всё, что модель извлечения не смогла разложить по
/// типизированным колонкам: вложенные объекты, списки, скаляры. Вместо
/// сырого JSON — рекурсивный вариант, чтобы отображение было исчерпывающим
/// `match`-ем, а не инспекцией типов в рантайме.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InfoValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<InfoValue>),
    Map(BTreeMap<String, InfoValue>),
}

impl Default for InfoValue {
    fn default() -> Self {
        InfoValue::Map(BTreeMap::new())
    }
}

impl InfoValue {
    /// Скалярное текстовое представление; `None` для списков и объектов.
    pub fn as_scalar_text(&self) -> Option<String> {
        match self {
            InfoValue::Null => Some(String::new()),
            InfoValue::Bool(b) => Some(b.to_string()),
            InfoValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    Some(format!("{}", *n as i64))
                } else {
                    Some(n.to_string())
                }
            }
            InfoValue::Text(s) => Some(s.clone()),
            InfoValue::List(_) | InfoValue::Map(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            InfoValue::Null => true,
            InfoValue::Text(s) => s.is_empty(),
            InfoValue::List(items) => items.is_empty(),
            InfoValue::Map(map) => map.is_empty(),
            InfoValue::Bool(_) | InfoValue::Number(_) => false,
        }
    }
}

/// Ключи additional_info приходят в snake_case; для отображения
/// подчёркивания заменяются пробелами ("grace_period" -> "grace period").
pub fn humanize_key(key: &str) -> String {
    key.replace('_', " ")
}
