// Business-level consistency checks
//
// Structural validation already happened in the fetcher by the time a
// scenario holds a typed value; these checks compare values against what was
// submitted and against each other. Every check is named by an invariant
// string that ends up in the error message.

use std::fmt::Debug;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::core::{Page, PageRequest, Pagination, Result, ScenarioError};

pub fn assert_equals<T>(invariant: &str, expected: &T, actual: &T) -> Result<()>
where
    T: PartialEq + Debug + ?Sized,
{
    if expected == actual {
        Ok(())
    } else {
        Err(ScenarioError::invariant(
            invariant,
            format!("expected {:?}, got {:?}", expected, actual),
        ))
    }
}

pub fn assert_predicate(invariant: &str, condition: bool) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(ScenarioError::invariant(invariant, "predicate does not hold"))
    }
}

/// Child entity points at the parent it was created under
pub fn assert_foreign_key(invariant: &str, parent_id: Uuid, child_fk: Uuid) -> Result<()> {
    if parent_id == child_fk {
        Ok(())
    } else {
        Err(ScenarioError::invariant(
            invariant,
            format!("child references {}, parent is {}", child_fk, parent_id),
        ))
    }
}

/// Every field of `submitted` (except `ignore`) comes back unchanged in
/// `returned`. Numbers compare by value, so `1000` equals `1000.0`.
pub fn assert_echoes<S, R>(invariant: &str, submitted: &S, returned: &R, ignore: &[&str]) -> Result<()>
where
    S: Serialize,
    R: Serialize,
{
    let submitted = serde_json::to_value(submitted)?;
    let returned = serde_json::to_value(returned)?;
    let fields = submitted.as_object().ok_or_else(|| {
        ScenarioError::invariant(invariant, "submitted value is not an object")
    })?;

    for (field, sent) in fields {
        if ignore.contains(&field.as_str()) {
            continue;
        }
        let got = returned.get(field).unwrap_or(&Value::Null);
        if !json_equal(sent, got) {
            return Err(ScenarioError::invariant(
                invariant,
                format!("field '{}' sent {}, returned {}", field, sent, got),
            ));
        }
    }

    Ok(())
}

/// After an update, every field outside `modified` (and `updated_at`) is
/// unchanged
pub fn assert_unmodified<T: Serialize>(
    invariant: &str,
    before: &T,
    after: &T,
    modified: &[&str],
) -> Result<()> {
    let before = serde_json::to_value(before)?;
    let after = serde_json::to_value(after)?;
    let fields = before.as_object().ok_or_else(|| {
        ScenarioError::invariant(invariant, "value before update is not an object")
    })?;

    for (field, old) in fields {
        if field == "updated_at" || modified.contains(&field.as_str()) {
            continue;
        }
        let new = after.get(field).unwrap_or(&Value::Null);
        if !json_equal(old, new) {
            return Err(ScenarioError::invariant(
                invariant,
                format!("field '{}' changed from {} to {}", field, old, new),
            ));
        }
    }

    Ok(())
}

pub fn assert_updated_at_monotonic(
    invariant: &str,
    before: DateTime<Utc>,
    after: DateTime<Utc>,
) -> Result<()> {
    if after >= before {
        Ok(())
    } else {
        Err(ScenarioError::invariant(
            invariant,
            format!("updated_at went backwards: {} -> {}", before, after),
        ))
    }
}

/// Page bookkeeping matches the request and the record count
pub fn assert_pagination<T>(invariant: &str, page: &Page<T>, request: &PageRequest) -> Result<()> {
    let Pagination {
        current,
        limit,
        records,
        pages,
    } = page.pagination;

    if current != request.effective_page() {
        return Err(ScenarioError::invariant(
            invariant,
            format!("current page {} but requested {}", current, request.effective_page()),
        ));
    }
    if limit != request.effective_limit() {
        return Err(ScenarioError::invariant(
            invariant,
            format!("limit {} but requested {}", limit, request.effective_limit()),
        ));
    }
    if page.data.len() as u64 > u64::from(limit) {
        return Err(ScenarioError::invariant(
            invariant,
            format!("{} records on a page limited to {}", page.data.len(), limit),
        ));
    }
    let expected_pages = Pagination::expected_pages(records, limit);
    if pages != expected_pages {
        return Err(ScenarioError::invariant(
            invariant,
            format!(
                "pages is {} but ceil({} / {}) = {}",
                pages, records, limit, expected_pages
            ),
        ));
    }

    Ok(())
}

/// Every entry satisfies the requested filter
pub fn assert_all<T, P>(invariant: &str, items: &[T], predicate: P) -> Result<()>
where
    T: Debug,
    P: Fn(&T) -> bool,
{
    match items.iter().position(|item| !predicate(item)) {
        None => Ok(()),
        Some(index) => Err(ScenarioError::invariant(
            invariant,
            format!("entry {} does not match: {:?}", index, items[index]),
        )),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Split a sort token such as `-created_at` into direction and field
    pub fn parse_token(token: &str) -> Option<(SortDirection, &str)> {
        if let Some(field) = token.strip_prefix('+') {
            Some((SortDirection::Ascending, field))
        } else {
            token
                .strip_prefix('-')
                .map(|field| (SortDirection::Descending, field))
        }
    }
}

/// Adjacent entries are in order by `key`
pub fn assert_sorted_by<T, K, F>(
    invariant: &str,
    items: &[T],
    key: F,
    direction: SortDirection,
) -> Result<()>
where
    K: PartialOrd + Debug,
    F: Fn(&T) -> K,
{
    for (index, pair) in items.windows(2).enumerate() {
        let (a, b) = (key(&pair[0]), key(&pair[1]));
        let ordered = match direction {
            SortDirection::Ascending => a <= b,
            SortDirection::Descending => a >= b,
        };
        if !ordered {
            return Err(ScenarioError::invariant(
                invariant,
                format!(
                    "entries {} and {} out of {:?} order: {:?} then {:?}",
                    index,
                    index + 1,
                    direction,
                    a,
                    b
                ),
            ));
        }
    }

    Ok(())
}

fn json_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| json_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).map_or(false, |y| json_equal(x, y)))
        }
        _ => a == b,
    }
}
