//! Field rules for use inside `Model::validate`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::record::ValidationErrors;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ValidationRule {
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub max_length: Option<u32>,
    #[serde(default)]
    pub min_length: Option<u32>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub allowed: Option<Vec<Value>>,
    #[serde(default)]
    pub minimum: Option<f64>,
    #[serde(default)]
    pub maximum: Option<f64>,
}

impl ValidationRule {
    pub fn required() -> Self {
        ValidationRule {
            required: Some(true),
            ..Default::default()
        }
    }

    pub fn max_length(mut self, n: u32) -> Self {
        self.max_length = Some(n);
        self
    }

    pub fn min_length(mut self, n: u32) -> Self {
        self.min_length = Some(n);
        self
    }

    pub fn format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    pub fn pattern(mut self, pattern: &str) -> Self {
        self.pattern = Some(pattern.to_string());
        self
    }

    pub fn allowed(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.allowed = Some(values.into_iter().collect());
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.minimum = Some(min);
        self.maximum = Some(max);
        self
    }
}

/// Checks `values` against `rules`, collecting every failure into `errors`.
/// Blank strings count as missing for `required`.
pub fn validate_fields(values: &Map<String, Value>, rules: &[(&str, ValidationRule)], errors: &mut ValidationErrors) {
    for (field, rule) in rules {
        let val = values.get(*field).filter(|v| !v.is_null());
        let blank = match val {
            None => true,
            Some(Value::String(s)) => s.trim().is_empty(),
            Some(_) => false,
        };
        if blank {
            if rule.required == Some(true) {
                errors.add(*field, "is not present");
            }
            continue;
        }
        if let Some(v) = val {
            validate_field(field, v, rule, errors);
        }
    }
}

/// Serializes `model` and runs [`validate_fields`] over it.
pub fn validate_model<T: Serialize>(model: &T, rules: &[(&str, ValidationRule)], errors: &mut ValidationErrors) {
    match serde_json::to_value(model) {
        Ok(Value::Object(map)) => validate_fields(&map, rules, errors),
        _ => errors.add("base", "cannot be validated"),
    }
}

fn validate_field(col: &str, v: &Value, rule: &ValidationRule, errors: &mut ValidationErrors) {
    if let Some(format) = &rule.format {
        if let Some(message) = check_format(v, format) {
            errors.add(col, message);
        }
    }
    if let Some(s) = v.as_str() {
        let len = s.chars().count();
        if let Some(max) = rule.max_length {
            if len > max as usize {
                errors.add(col, format!("is longer than {} characters", max));
            }
        }
        if let Some(min) = rule.min_length {
            if len < min as usize {
                errors.add(col, format!("is shorter than {} characters", min));
            }
        }
        if let Some(ref pattern) = rule.pattern {
            match Regex::new(pattern) {
                Ok(re) if !re.is_match(s) => errors.add(col, "is invalid"),
                Ok(_) => {}
                Err(_) => errors.add(col, "has an invalid pattern rule"),
            }
        }
    }
    if let Some(ref allowed) = rule.allowed {
        if !allowed.iter().any(|a| value_eq(v, a)) {
            let shown: Vec<String> = allowed.iter().take(5).map(Value::to_string).collect();
            errors.add(col, format!("is not in range or set: [{}]", shown.join(", ")));
        }
    }
    if let Some(n) = v.as_f64() {
        if let Some(min) = rule.minimum {
            if n < min {
                errors.add(col, format!("must be greater than or equal to {}", min));
            }
        }
        if let Some(max) = rule.maximum {
            if n > max {
                errors.add(col, format!("must be less than or equal to {}", max));
            }
        }
    }
}

fn value_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::String(s), Value::String(t)) => s == t,
        (Value::Number(n), Value::Number(m)) => n.as_f64() == m.as_f64(),
        _ => a == b,
    }
}

fn check_format(v: &Value, format: &str) -> Option<&'static str> {
    let s = v.as_str()?;
    match format.to_lowercase().as_str() {
        "email" if !s.contains('@') || s.len() < 3 => Some("is not a valid email"),
        "uuid" if uuid::Uuid::parse_str(s).is_err() => Some("is not a valid UUID"),
        _ => None,
    }
}
