// Declared schemas for backend DTOs
//
// A `Schema` describes the JSON shape a response must have. The fetcher
// validates every successful body against the declared schema of its target
// type before deserializing it, and the random generator produces values from
// the same descriptors.

use std::fmt;
use std::sync::OnceLock;

use chrono::DateTime;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// Format tags for string values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StringFormat {
    Uuid,
    DateTime,
    Email,
    Uri,
}

impl StringFormat {
    /// Whether `value` conforms to this format
    pub fn matches(&self, value: &str) -> bool {
        match self {
            StringFormat::Uuid => value.len() == 36 && Uuid::try_parse(value).is_ok(),
            StringFormat::DateTime => DateTime::parse_from_rfc3339(value).is_ok(),
            StringFormat::Email => email_regex().is_match(value),
            StringFormat::Uri => reqwest::Url::parse(value).is_ok(),
        }
    }
}

impl fmt::Display for StringFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringFormat::Uuid => write!(f, "uuid"),
            StringFormat::DateTime => write!(f, "date-time"),
            StringFormat::Email => write!(f, "email"),
            StringFormat::Uri => write!(f, "uri"),
        }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
            .expect("email pattern compiles")
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    Any,
    Boolean,
    Integer {
        minimum: Option<i64>,
        maximum: Option<i64>,
    },
    Number {
        minimum: Option<f64>,
        maximum: Option<f64>,
    },
    String {
        format: Option<StringFormat>,
        min_length: Option<usize>,
        max_length: Option<usize>,
    },
    Enum(Vec<String>),
    Array {
        items: Box<Schema>,
        min_items: Option<usize>,
        max_items: Option<usize>,
    },
    Object {
        name: String,
        properties: Vec<Property>,
    },
}

/// A named member of an object schema
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub schema: Schema,
    /// Required properties must be present (they may still be `null` when
    /// the schema is nullable)
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub kind: SchemaKind,
    pub nullable: bool,
}

impl Schema {
    fn of(kind: SchemaKind) -> Self {
        Self {
            kind,
            nullable: false,
        }
    }

    pub fn any() -> Self {
        Self::of(SchemaKind::Any)
    }

    pub fn boolean() -> Self {
        Self::of(SchemaKind::Boolean)
    }

    pub fn integer() -> Self {
        Self::of(SchemaKind::Integer {
            minimum: None,
            maximum: None,
        })
    }

    pub fn number() -> Self {
        Self::of(SchemaKind::Number {
            minimum: None,
            maximum: None,
        })
    }

    pub fn string() -> Self {
        Self::of(SchemaKind::String {
            format: None,
            min_length: None,
            max_length: None,
        })
    }

    pub fn format(format: StringFormat) -> Self {
        Self::of(SchemaKind::String {
            format: Some(format),
            min_length: None,
            max_length: None,
        })
    }

    pub fn uuid() -> Self {
        Self::format(StringFormat::Uuid)
    }

    pub fn date_time() -> Self {
        Self::format(StringFormat::DateTime)
    }

    pub fn enumeration(values: &[&str]) -> Self {
        Self::of(SchemaKind::Enum(values.iter().map(|v| v.to_string()).collect()))
    }

    pub fn array(items: Schema) -> Self {
        Self::of(SchemaKind::Array {
            items: Box::new(items),
            min_items: None,
            max_items: None,
        })
    }

    pub fn object(name: impl Into<String>) -> Self {
        Self::of(SchemaKind::Object {
            name: name.into(),
            properties: Vec::new(),
        })
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Add a required property. Only meaningful on object schemas.
    pub fn property(self, name: &str, schema: Schema) -> Self {
        self.push_property(name, schema, true)
    }

    /// Add a property that may be absent
    pub fn optional_property(self, name: &str, schema: Schema) -> Self {
        self.push_property(name, schema, false)
    }

    fn push_property(mut self, name: &str, schema: Schema, required: bool) -> Self {
        if let SchemaKind::Object { properties, .. } = &mut self.kind {
            properties.push(Property {
                name: name.to_string(),
                schema,
                required,
            });
        }
        self
    }

    /// Inclusive lower bound for integer and number schemas
    pub fn minimum(mut self, bound: i64) -> Self {
        match &mut self.kind {
            SchemaKind::Integer { minimum, .. } => *minimum = Some(bound),
            SchemaKind::Number { minimum, .. } => *minimum = Some(bound as f64),
            _ => {}
        }
        self
    }

    /// Inclusive upper bound for integer and number schemas
    pub fn maximum(mut self, bound: i64) -> Self {
        match &mut self.kind {
            SchemaKind::Integer { maximum, .. } => *maximum = Some(bound),
            SchemaKind::Number { maximum, .. } => *maximum = Some(bound as f64),
            _ => {}
        }
        self
    }

    /// Length bounds (in characters) for strings, item bounds for arrays.
    ///
    /// Formatted strings keep the length their format implies, so bounds on
    /// them are ignored.
    pub fn length(mut self, min: usize, max: usize) -> Self {
        match &mut self.kind {
            SchemaKind::String {
                format: None,
                min_length,
                max_length,
            } => {
                *min_length = Some(min);
                *max_length = Some(max);
            }
            SchemaKind::Array {
                min_items,
                max_items,
                ..
            } => {
                *min_items = Some(min);
                *max_items = Some(max);
            }
            _ => {}
        }
        self
    }

    /// Type name used in error messages
    pub fn type_name(&self) -> String {
        match &self.kind {
            SchemaKind::Object { name, .. } => name.clone(),
            _ => self.expected(),
        }
    }

    /// Human-readable expectation, e.g. `(string & Format<"uuid"> | null)`
    pub fn expected(&self) -> String {
        let base = match &self.kind {
            SchemaKind::Any => "any".to_string(),
            SchemaKind::Boolean => "boolean".to_string(),
            SchemaKind::Integer { minimum, maximum } => {
                let mut text = "integer".to_string();
                if let Some(min) = minimum {
                    text.push_str(&format!(" & Minimum<{}>", min));
                }
                if let Some(max) = maximum {
                    text.push_str(&format!(" & Maximum<{}>", max));
                }
                text
            }
            SchemaKind::Number { minimum, maximum } => {
                let mut text = "number".to_string();
                if let Some(min) = minimum {
                    text.push_str(&format!(" & Minimum<{}>", min));
                }
                if let Some(max) = maximum {
                    text.push_str(&format!(" & Maximum<{}>", max));
                }
                text
            }
            SchemaKind::String {
                format,
                min_length,
                max_length,
            } => {
                let mut text = "string".to_string();
                if let Some(format) = format {
                    text.push_str(&format!(" & Format<\"{}\">", format));
                }
                if let Some(min) = min_length {
                    text.push_str(&format!(" & MinLength<{}>", min));
                }
                if let Some(max) = max_length {
                    text.push_str(&format!(" & MaxLength<{}>", max));
                }
                text
            }
            SchemaKind::Enum(values) => format!(
                "({})",
                values
                    .iter()
                    .map(|v| format!("\"{}\"", v))
                    .collect::<Vec<_>>()
                    .join(" | ")
            ),
            SchemaKind::Array { items, .. } => format!("Array<{}>", items.expected()),
            SchemaKind::Object { name, .. } => name.clone(),
        };

        if self.nullable {
            format!("({} | null)", base)
        } else {
            base
        }
    }

    /// Validate `value`, collecting every violation
    pub fn validate(&self, value: &Value) -> Vec<Violation> {
        let mut violations = Vec::new();
        self.validate_at("$input", value, &mut violations);
        violations
    }

    pub fn is_valid(&self, value: &Value) -> bool {
        self.validate(value).is_empty()
    }

    fn validate_at(&self, path: &str, value: &Value, out: &mut Vec<Violation>) {
        if value.is_null() {
            if !self.nullable && self.kind != SchemaKind::Any {
                out.push(Violation::new(path, self.expected(), value.clone()));
            }
            return;
        }

        let ok = match &self.kind {
            SchemaKind::Any => true,
            SchemaKind::Boolean => value.is_boolean(),
            SchemaKind::Integer { minimum, maximum } => match as_integer(value) {
                Some(n) => {
                    minimum.map_or(true, |min| n >= min as f64)
                        && maximum.map_or(true, |max| n <= max as f64)
                }
                None => false,
            },
            SchemaKind::Number { minimum, maximum } => match value.as_f64() {
                Some(n) => {
                    n.is_finite()
                        && minimum.map_or(true, |min| n >= min)
                        && maximum.map_or(true, |max| n <= max)
                }
                None => false,
            },
            SchemaKind::String {
                format,
                min_length,
                max_length,
            } => match value.as_str() {
                Some(s) => {
                    let len = s.chars().count();
                    format.map_or(true, |f| f.matches(s))
                        && min_length.map_or(true, |min| len >= min)
                        && max_length.map_or(true, |max| len <= max)
                }
                None => false,
            },
            SchemaKind::Enum(values) => value
                .as_str()
                .map_or(false, |s| values.iter().any(|v| v == s)),
            SchemaKind::Array {
                items,
                min_items,
                max_items,
            } => match value.as_array() {
                Some(elements) => {
                    for (index, element) in elements.iter().enumerate() {
                        items.validate_at(&format!("{}[{}]", path, index), element, out);
                    }
                    min_items.map_or(true, |min| elements.len() >= min)
                        && max_items.map_or(true, |max| elements.len() <= max)
                }
                None => false,
            },
            SchemaKind::Object { properties, .. } => match value.as_object() {
                Some(map) => {
                    for property in properties {
                        let child_path = format!("{}.{}", path, property.name);
                        match map.get(&property.name) {
                            Some(child) => property.schema.validate_at(&child_path, child, out),
                            None if property.required => out.push(Violation::new(
                                child_path,
                                property.schema.expected(),
                                Value::Null,
                            )),
                            None => {}
                        }
                    }
                    true
                }
                None => false,
            },
        };

        if !ok {
            out.push(Violation::new(path, self.expected(), value.clone()));
        }
    }
}

fn as_integer(value: &Value) -> Option<f64> {
    if let Some(n) = value.as_i64() {
        return Some(n as f64);
    }
    if let Some(n) = value.as_u64() {
        return Some(n as f64);
    }
    value.as_f64().filter(|n| n.is_finite() && n.fract() == 0.0)
}

/// One structural mismatch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// JSON path, rooted at `$input`
    pub path: String,
    pub expected: String,
    pub value: Value,
}

impl Violation {
    pub fn new(path: impl Into<String>, expected: impl Into<String>, value: Value) -> Self {
        Self {
            path: path.into(),
            expected: expected.into(),
            value,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: expected {}, got {}", self.path, self.expected, self.value)
    }
}
