//! Search parameter normalization
//!
//! Callers hand over a loosely typed [`SearchInput`] (typically deserialised
//! straight from a request) and get back a strictly typed [`SearchParams`].
//! Malformed values never fail: they fall back to the defaults.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PER_PAGE: usize = 15;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Anything other than a case-insensitive "desc" is ascending
    fn from_value(value: &Value) -> Self {
        match value {
            Value::String(dir) if dir.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter types usable in [`SearchParams`]
///
/// `from_value` receives only non-null, non-empty input and returns the
/// canonical form of the filter, or `None` when the input carries no filter.
pub trait SearchFilter: Clone + fmt::Debug + Send + Sync + Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

impl SearchFilter for String {
    fn from_value(value: &Value) -> Option<Self> {
        value_to_text(value)
    }
}

/// Raw, untrusted search input
///
/// Every field is an arbitrary JSON value and defaults to null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchInput {
    pub page: Value,
    pub per_page: Value,
    pub sort: Value,
    pub sort_dir: Value,
    pub filter: Value,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: impl Into<Value>) -> Self {
        self.page = page.into();
        self
    }

    pub fn with_per_page(mut self, per_page: impl Into<Value>) -> Self {
        self.per_page = per_page.into();
        self
    }

    pub fn with_sort(mut self, sort: impl Into<Value>) -> Self {
        self.sort = sort.into();
        self
    }

    pub fn with_sort_dir(mut self, sort_dir: impl Into<Value>) -> Self {
        self.sort_dir = sort_dir.into();
        self
    }

    pub fn with_filter(mut self, filter: impl Into<Value>) -> Self {
        self.filter = filter.into();
        self
    }
}

/// Normalized pagination, sort and filter descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams<F = String> {
    page: usize,
    per_page: usize,
    sort: Option<String>,
    sort_dir: Option<SortDirection>,
    filter: Option<F>,
}

impl<F> Default for SearchParams<F> {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            sort: None,
            sort_dir: None,
            filter: None,
        }
    }
}

impl<F: SearchFilter> SearchParams<F> {
    /// Normalize raw input; never fails
    pub fn from_input(input: &SearchInput) -> Self {
        let sort = value_to_text(&input.sort);
        let sort_dir = sort
            .as_ref()
            .map(|_| SortDirection::from_value(&input.sort_dir));
        let filter = match &input.filter {
            Value::Null => None,
            Value::String(text) if text.is_empty() => None,
            other => F::from_value(other),
        };

        Self {
            page: positive_int_or(&input.page, DEFAULT_PAGE),
            per_page: positive_int_or(&input.per_page, DEFAULT_PER_PAGE),
            sort,
            sort_dir,
            filter,
        }
    }
}

impl<F> SearchParams<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero falls back to the default page
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = if page >= 1 { page } else { DEFAULT_PAGE };
        self
    }

    /// Zero falls back to the default page size
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = if per_page >= 1 { per_page } else { DEFAULT_PER_PAGE };
        self
    }

    /// An empty field name clears both sort and direction
    pub fn with_sort(mut self, sort: impl Into<String>, sort_dir: SortDirection) -> Self {
        let sort = sort.into();
        if sort.is_empty() {
            self.sort = None;
            self.sort_dir = None;
        } else {
            self.sort = Some(sort);
            self.sort_dir = Some(sort_dir);
        }
        self
    }

    pub fn with_filter(mut self, filter: F) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn sort_dir(&self) -> Option<SortDirection> {
        self.sort_dir
    }

    pub fn filter(&self) -> Option<&F> {
        self.filter.as_ref()
    }
}

/// Integral JSON numbers >= 1 pass, everything else yields `default`
fn positive_int_or(value: &Value, default: usize) -> usize {
    let Value::Number(number) = value else {
        return default;
    };

    let integral = number.as_u64().or_else(|| {
        number
            .as_f64()
            .filter(|n| n.is_finite() && n.fract() == 0.0 && *n >= 1.0 && *n <= u64::MAX as f64)
            .map(|n| n as u64)
    });

    integral
        .filter(|n| *n >= 1)
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(default)
}

/// Text form of a loosely typed value; null and "" carry nothing
fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}
