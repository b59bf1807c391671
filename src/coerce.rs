//! Conversions behind the typed accessors (`as_bool`, `as_int`, ...).
//!
//! Each function takes the dotted key only to build the error message.

use serde_json::Value;

use crate::error::NkconfError;

/// Generic truthiness: null, `false`, zero, and empty strings, lists, or
/// sections are false. Everything else is true.
pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

pub fn to_int(key: &str, value: &Value) -> Result<i64, NkconfError> {
    let fail = |reason: String| NkconfError::Conversion {
        key: key.into(),
        target: "int",
        reason,
    };
    match value {
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            let f = n.as_f64().unwrap_or(f64::NAN);
            float_to_int(f).ok_or_else(|| fail(format!("{n} is out of range")))
        }
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .map_err(|e| fail(format!("{s:?}: {e}")))
        }
        other => Err(fail(format!("unsupported value {other}"))),
    }
}

fn float_to_int(f: f64) -> Option<i64> {
    let t = f.trunc();
    if t.is_finite() && t >= i64::MIN as f64 && t < i64::MAX as f64 {
        Some(t as i64)
    } else {
        None
    }
}

pub fn to_float(key: &str, value: &Value) -> Result<f64, NkconfError> {
    let fail = |reason: String| NkconfError::Conversion {
        key: key.into(),
        target: "float",
        reason,
    };
    match value {
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| fail(format!("{n} is not representable"))),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| fail(format!("{s:?}: {e}"))),
        other => Err(fail(format!("unsupported value {other}"))),
    }
}

/// Strings come back unquoted; every other value renders as compact JSON.
pub fn to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Lists as-is, strings as their characters, sections as their keys.
pub fn to_list(key: &str, value: &Value) -> Result<Vec<Value>, NkconfError> {
    match value {
        Value::Array(items) => Ok(items.clone()),
        Value::String(s) => Ok(s.chars().map(|c| Value::String(c.to_string())).collect()),
        Value::Object(section) => Ok(section.keys().cloned().map(Value::String).collect()),
        other => Err(NkconfError::Conversion {
            key: key.into(),
            target: "list",
            reason: format!("{other} is not iterable"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthiness() {
        for falsy in [
            json!(null),
            json!(false),
            json!(0),
            json!(0.0),
            json!(""),
            json!([]),
            json!({}),
        ] {
            assert!(!to_bool(&falsy), "{falsy} should be false");
        }
        for truthy in [json!(true), json!(-1), json!(0.5), json!("0"), json!([0])] {
            assert!(to_bool(&truthy), "{truthy} should be true");
        }
    }

    #[test]
    fn int_from_string() {
        assert_eq!(to_int("n", &json!("42")).unwrap(), 42);
        assert_eq!(to_int("n", &json!(" -7 ")).unwrap(), -7);
        assert_eq!(to_int("n", &json!("+3")).unwrap(), 3);
        assert!(to_int("n", &json!("+-3")).is_err());
    }

    #[test]
    fn int_rejects_decimal_string() {
        let err = to_int("n", &json!("3.5")).unwrap_err();
        assert!(matches!(err, NkconfError::Conversion { target: "int", .. }));
    }

    #[test]
    fn int_truncates_float() {
        assert_eq!(to_int("n", &json!(3.9)).unwrap(), 3);
        assert_eq!(to_int("n", &json!(-3.9)).unwrap(), -3);
    }

    #[test]
    fn int_from_bool() {
        assert_eq!(to_int("n", &json!(true)).unwrap(), 1);
    }

    #[test]
    fn int_rejects_null_and_containers() {
        assert!(to_int("n", &json!(null)).is_err());
        assert!(to_int("n", &json!([1])).is_err());
        assert!(to_int("n", &json!({"a": 1})).is_err());
    }

    #[test]
    fn float_conversions() {
        assert_eq!(to_float("f", &json!("1.5")).unwrap(), 1.5);
        assert_eq!(to_float("f", &json!(2)).unwrap(), 2.0);
        assert_eq!(to_float("f", &json!(false)).unwrap(), 0.0);
        assert!(to_float("f", &json!("abc")).is_err());
        assert!(to_float("f", &json!(null)).is_err());
    }

    #[test]
    fn string_rendering() {
        assert_eq!(to_string(&json!("plain")), "plain");
        assert_eq!(to_string(&json!(8080)), "8080");
        assert_eq!(to_string(&json!(true)), "true");
        assert_eq!(to_string(&json!(null)), "null");
        assert_eq!(to_string(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn list_conversions() {
        assert_eq!(to_list("l", &json!([1, "a"])).unwrap(), vec![json!(1), json!("a")]);
        assert_eq!(to_list("l", &json!("ab")).unwrap(), vec![json!("a"), json!("b")]);
        assert_eq!(
            to_list("l", &json!({"y": 1, "x": 2})).unwrap(),
            vec![json!("x"), json!("y")]
        );
        assert!(to_list("l", &json!(5)).is_err());
    }
}
