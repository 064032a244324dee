// Utilitários para exibir valores monetários recebidos do ASAAS

use serde_json::{Number, Value};

/// Renders a JSON number the way it reads in a plain-text template:
/// integral floats lose their fraction (`100.00` → `100`), others keep the
/// shortest round-trip form (`49.9` → `49.9`).
pub fn format_amount(number: &Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }

    match number.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => number.to_string(),
    }
}

/// Text form of a scalar JSON value; `None` for null, empty strings,
/// arrays and objects.
pub fn scalar_display(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(format_amount(n)),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
