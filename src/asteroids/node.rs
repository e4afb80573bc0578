//! Path-tracking view over an untyped JSON entry.
//!
//! Every accessor either yields the next node or a [`FieldError`] naming the
//! full path that was missing or had the wrong type, so a bad entry is
//! reported precisely instead of failing on the first absent key.

use serde_json::Value;

/// Required field that was absent, null, or of the wrong type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: String,
}

impl FieldError {
    fn at(path: String) -> Self {
        Self { path }
    }
}

#[derive(Debug, Clone)]
pub struct Node<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> Node<'a> {
    pub fn root(value: &'a Value) -> Self {
        Self {
            value,
            path: String::new(),
        }
    }

    pub fn field(&self, key: &str) -> Result<Node<'a>, FieldError> {
        let path = if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        };
        match self.value.get(key) {
            Some(value) if !value.is_null() => Ok(Node { value, path }),
            _ => Err(FieldError::at(path)),
        }
    }

    pub fn index(&self, i: usize) -> Result<Node<'a>, FieldError> {
        let path = format!("{}[{}]", self.path, i);
        match self.value.get(i) {
            Some(value) if !value.is_null() => Ok(Node { value, path }),
            _ => Err(FieldError::at(path)),
        }
    }

    /// Finite number, given either as a JSON number or a numeric string.
    pub fn as_f64(&self) -> Result<f64, FieldError> {
        let n = match self.value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        n.filter(|v| v.is_finite())
            .ok_or_else(|| FieldError::at(self.path.clone()))
    }

    pub fn as_str(&self) -> Result<&'a str, FieldError> {
        self.value
            .as_str()
            .ok_or_else(|| FieldError::at(self.path.clone()))
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.value.as_bool()
    }
}
