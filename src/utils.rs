//! Utility helpers shared across the crate.

use std::cell::Cell;

use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};

use crate::constants::CHRONO_DATE_FORMAT;

thread_local! {
    static NEXT_ID: Cell<u32> = const { Cell::new(1) };
}

/// Return the current timestamp in **milliseconds** since UNIX epoch.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Today's local date as `yyyy-mm-dd`, the earliest date a guest may pick.
pub fn today_iso() -> String {
    chrono::Local::now()
        .date_naive()
        .format(CHRONO_DATE_FORMAT)
        .to_string()
}

/// Next value of a per-page sequence, used to give every dialog its own id.
pub fn next_sequence() -> u32 {
    NEXT_ID.with(|id| {
        let current = id.get();
        id.set(current.wrapping_add(1));
        current
    })
}

/// JavaScript truthiness of a decoded JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// String form a value takes when appended to a `FormData`, with falsy
/// values replaced by `""` (the `value || ""` idiom).
pub fn form_text(value: &Value) -> String {
    if !is_truthy(value) {
        return String::new();
    }
    value_text(value)
}

/// `String(value)` for a JSON value.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.as_f64().map(format_number).unwrap_or_else(|| n.to_string()),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => value_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Coerce an arbitrary JS value to its string form, like `String(value)`.
pub fn js_to_string(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        s
    } else if let Some(n) = value.as_f64() {
        format_number(n)
    } else if let Some(b) = value.as_bool() {
        b.to_string()
    } else if value.is_null() {
        "null".to_string()
    } else if value.is_undefined() {
        "undefined".to_string()
    } else if let Some(object) = value.dyn_ref::<js_sys::Object>() {
        JsValue::from(object.to_string()).as_string().unwrap_or_default()
    } else {
        format!("{:?}", value)
    }
}

/// Render a number the way JavaScript prints it for integral and finite values.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let exp = format!("{:e}", n);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
            _ => exp,
        }
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthiness_follows_javascript() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!(7)));
    }

    #[test]
    fn form_text_defaults_falsy_to_empty() {
        assert_eq!(form_text(&json!("2024-05-01")), "2024-05-01");
        assert_eq!(form_text(&json!(null)), "");
        assert_eq!(form_text(&json!("")), "");
        assert_eq!(form_text(&json!(false)), "");
        assert_eq!(form_text(&json!(12)), "12");
        assert_eq!(form_text(&json!(["a", "b"])), "a,b");
    }

    #[test]
    fn numbers_print_like_javascript() {
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(7.5), "7.5");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1.5e21), "1.5e+21");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(123456.0), "123456");
    }

    #[test]
    fn float_json_numbers_drop_the_trailing_zero() {
        assert_eq!(form_text(&json!(7.0)), "7");
        assert_eq!(form_text(&json!([1.5e21, 2.0])), "1.5e+21,2");
        assert_eq!(value_text(&json!([null, 0, false])), ",0,false");
        assert_eq!(value_text(&json!({"a": 1})), "[object Object]");
    }

    #[test]
    fn sequence_is_monotonic() {
        let a = next_sequence();
        let b = next_sequence();
        assert!(b > a);
    }
}
