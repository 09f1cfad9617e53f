use std::ops::RangeInclusive;

use chrono::{DateTime, Duration, Utc};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};
use uuid::Uuid;

use super::schema::{Schema, SchemaKind, StringFormat};

const ALPHABETS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Default string length range when a schema does not bound it
const DEFAULT_STRING_LENGTH: (usize, usize) = (5, 16);

/// Default array length range when a schema does not bound it
const DEFAULT_ARRAY_LENGTH: (usize, usize) = (1, 3);

/// Span used for a numeric bound the schema leaves open
const DEFAULT_NUMERIC_SPAN: i64 = 1_000;

const MAX_DECIMAL_SCALE: u32 = 28;

/// Largest magnitude a `Decimal` mantissa can hold (2^96 - 1)
const MAX_DECIMAL_MANTISSA: i128 = (1 << 96) - 1;

/// `value * 10^scale` when it fits a `Decimal` mantissa
fn mantissa(value: i64, scale: u32) -> Option<i128> {
    10i128
        .checked_pow(scale)
        .and_then(|factor| i128::from(value).checked_mul(factor))
        .filter(|m| m.abs() <= MAX_DECIMAL_MANTISSA)
}

/// Inclusive range for a numeric schema. An open lower end starts at 0, or
/// one span below a negative maximum; an open upper end is one span above
/// the lower end.
fn integer_bounds(minimum: Option<i64>, maximum: Option<i64>) -> (i64, i64) {
    let low = match (minimum, maximum) {
        (Some(min), _) => min,
        (None, Some(max)) if max < 0 => max.saturating_sub(DEFAULT_NUMERIC_SPAN),
        (None, _) => 0,
    };
    let high = maximum.unwrap_or_else(|| low.saturating_add(DEFAULT_NUMERIC_SPAN));
    (low, high.max(low))
}

fn number_bounds(minimum: Option<f64>, maximum: Option<f64>) -> (f64, f64) {
    let span = DEFAULT_NUMERIC_SPAN as f64;
    let low = match (minimum, maximum) {
        (Some(min), _) => min,
        (None, Some(max)) if max < 0.0 => max - span,
        (None, _) => 0.0,
    };
    let high = maximum.unwrap_or(low + span);
    (low, high.max(low))
}

/// Seeded generator of schema-valid random values
///
/// Every scenario owns one, so a run seed reproduces the request bodies of
/// every scenario in that run.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    rng: StdRng,
}

impl RandomGenerator {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Lower-case letters only
    pub fn alphabets(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| ALPHABETS[self.rng.gen_range(0..ALPHABETS.len())] as char)
            .collect()
    }

    pub fn alphanumeric(&mut self, len: usize) -> String {
        (&mut self.rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }

    /// Space separated words of 3 to 7 letters
    pub fn paragraph(&mut self, words: usize) -> String {
        (0..words.max(1))
            .map(|_| {
                let len = self.rng.gen_range(3..=7);
                self.alphabets(len)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Paragraphs separated by blank lines
    pub fn content(&mut self, paragraphs: usize) -> String {
        (0..paragraphs.max(1))
            .map(|_| {
                let words = self.rng.gen_range(5..=12);
                self.paragraph(words)
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn email(&mut self) -> String {
        let local = self.alphanumeric(10).to_lowercase();
        let domain = self.alphabets(8);
        format!("{}@{}.com", local, domain)
    }

    /// Korean-style mobile number, e.g. `01012345678`
    pub fn mobile(&mut self) -> String {
        let prefix = *["010", "011", "016", "017", "019"]
            .choose(&mut self.rng)
            .unwrap_or(&"010");
        format!("{}{:08}", prefix, self.rng.gen_range(0..100_000_000u32))
    }

    pub fn uuid(&mut self) -> Uuid {
        uuid::Builder::from_random_bytes(self.rng.gen()).into_uuid()
    }

    pub fn integer(&mut self, range: RangeInclusive<i64>) -> i64 {
        self.rng.gen_range(range)
    }

    pub fn boolean(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Decimal in `range` with up to `scale` fractional digits.
    ///
    /// The scale is capped at 28 and lowered further while an endpoint of
    /// `range` would not fit the 96-bit mantissa at that scale.
    pub fn decimal(&mut self, range: RangeInclusive<i64>, scale: u32) -> Decimal {
        let (start, end) = (*range.start(), *range.end().max(range.start()));
        let mut scale = scale.min(MAX_DECIMAL_SCALE);
        loop {
            if let (Some(low), Some(high)) = (mantissa(start, scale), mantissa(end, scale)) {
                return Decimal::from_i128_with_scale(self.rng.gen_range(low..=high), scale);
            }
            // every i64 fits at scale 0
            scale -= 1;
        }
    }

    /// A timestamp within `days` of now, in either direction
    pub fn date_time_within(&mut self, days: i64) -> DateTime<Utc> {
        let span = days.max(1) * 24 * 60 * 60;
        let offset = self.rng.gen_range(-span..=span);
        Utc::now() + Duration::seconds(offset)
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// Up to `count` distinct elements, in random order
    pub fn sample<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        items
            .choose_multiple(&mut self.rng, count)
            .cloned()
            .collect()
    }

    /// Produce a value that satisfies `schema`.
    ///
    /// Nullable schemas yield `null` one time in four; optional object
    /// properties are included half the time.
    pub fn generate(&mut self, schema: &Schema) -> Value {
        if schema.nullable && self.rng.gen_ratio(1, 4) {
            return Value::Null;
        }

        match &schema.kind {
            SchemaKind::Any => Value::String(self.alphabets(8)),
            SchemaKind::Boolean => Value::Bool(self.boolean()),
            SchemaKind::Integer { minimum, maximum } => {
                let (low, high) = integer_bounds(*minimum, *maximum);
                Value::from(self.integer(low..=high))
            }
            SchemaKind::Number { minimum, maximum } => {
                let (low, high) = number_bounds(*minimum, *maximum);
                let n = if high > low {
                    self.rng.gen_range(low..=high)
                } else {
                    low
                };
                Number::from_f64(n).map_or(Value::Null, Value::Number)
            }
            SchemaKind::String {
                format: Some(format),
                ..
            } => Value::String(self.formatted(*format)),
            SchemaKind::String {
                format: None,
                min_length,
                max_length,
            } => {
                let low = min_length.unwrap_or(DEFAULT_STRING_LENGTH.0);
                let high = max_length.unwrap_or(low.max(DEFAULT_STRING_LENGTH.1)).max(low);
                let len = self.rng.gen_range(low..=high);
                Value::String(self.alphanumeric(len))
            }
            SchemaKind::Enum(values) => self
                .pick(values)
                .map_or(Value::Null, |v| Value::String(v.clone())),
            SchemaKind::Array {
                items,
                min_items,
                max_items,
            } => {
                let low = min_items.unwrap_or(DEFAULT_ARRAY_LENGTH.0);
                let high = max_items.unwrap_or(low.max(DEFAULT_ARRAY_LENGTH.1)).max(low);
                let len = self.rng.gen_range(low..=high);
                Value::Array((0..len).map(|_| self.generate(items)).collect())
            }
            SchemaKind::Object { properties, .. } => {
                let mut map = Map::new();
                for property in properties {
                    if property.required || self.boolean() {
                        map.insert(property.name.clone(), self.generate(&property.schema));
                    }
                }
                Value::Object(map)
            }
        }
    }

    fn formatted(&mut self, format: StringFormat) -> String {
        match format {
            StringFormat::Uuid => self.uuid().to_string(),
            StringFormat::DateTime => self.date_time_within(365).to_rfc3339(),
            StringFormat::Email => self.email(),
            StringFormat::Uri => format!("https://{}.com/{}", self.alphabets(8), self.alphabets(6)),
        }
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}
