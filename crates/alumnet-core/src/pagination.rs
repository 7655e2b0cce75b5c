//! Pagination contract shared by every listing endpoint.
//!
//! Listing endpoints accept a [`PaginationRequest`] from the query string and
//! normalize it once into a [`PageRequest`]. Normalization never fails: missing,
//! empty, non-numeric or out-of-range values are coerced to the nearest valid
//! value or the default.
//!
//! - `page`: 1-indexed, default 1
//! - `limit`: items per page, clamped to [1, 100], default 10
//! - `sort`: `field:direction`, default `created_at:desc`
//! - `search`: free text, trimmed, default empty
//!
//! Results are returned as a [`PageResult`]:
//!
//! ```json
//! {
//!   "data": [...],
//!   "total": 42,
//!   "page": 2,
//!   "limit": 10,
//!   "last_page": 5
//! }
//! ```

use std::num::IntErrorKind;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;
pub const DEFAULT_SORT: &str = "created_at:desc";

/// Deserializes an optional string into an optional i64.
///
/// Query parameters may be empty strings or garbage like `page=abc`; both are
/// treated as absent rather than rejected. Numbers beyond the i64 range saturate.
fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.and_then(|s| parse_saturating(&s)))
}

fn parse_saturating(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Raw listing parameters as received from the caller.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationRequest {
    /// Page number (1-indexed, default: 1)
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub page: Option<i64>,
    /// Items per page (1-100, default: 10)
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub limit: Option<i64>,
    /// Sort as `field:direction`, e.g. `nama:asc` (default: `created_at:desc`)
    #[serde(default)]
    pub sort: Option<String>,
    /// Case-insensitive substring search over the entity's searchable fields
    #[serde(default)]
    pub search: Option<String>,
}

impl PaginationRequest {
    /// Builds the request from raw query pairs. The first occurrence of a key wins
    /// and unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut request = Self::default();
        let mut seen_page = false;
        let mut seen_limit = false;

        for (key, value) in pairs {
            match key.as_ref() {
                "page" if !seen_page => {
                    seen_page = true;
                    request.page = parse_saturating(&value.into());
                }
                "limit" if !seen_limit => {
                    seen_limit = true;
                    request.limit = parse_saturating(&value.into());
                }
                "sort" if request.sort.is_none() => request.sort = Some(value.into()),
                "search" if request.search.is_none() => request.search = Some(value.into()),
                _ => {}
            }
        }

        request
    }

    #[must_use]
    pub fn normalize(&self) -> PageRequest {
        let page = match self.page {
            Some(p) if p >= 1 => p,
            _ => DEFAULT_PAGE,
        };
        let limit = match self.limit {
            Some(l) if l < 1 => DEFAULT_LIMIT,
            Some(l) => l.min(MAX_LIMIT),
            None => DEFAULT_LIMIT,
        };
        let sort = self
            .sort
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SORT)
            .to_string();
        let search = self
            .search
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        PageRequest {
            page,
            limit,
            sort,
            search,
        }
    }
}

/// Normalized listing parameters. All fields are within bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
    pub sort: String,
    pub search: String,
}

impl Default for PageRequest {
    fn default() -> Self {
        PaginationRequest::default().normalize()
    }
}

impl PageRequest {
    /// Rows to skip. Saturates instead of overflowing for absurd page numbers.
    #[must_use]
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    #[must_use]
    pub fn has_search(&self) -> bool {
        !self.search.is_empty()
    }
}

/// One page of results plus totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageResult<T> {
    pub data: Vec<T>,
    /// Total matching rows, ignoring pagination
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    /// Number of the last page; 0 when there are no rows
    pub last_page: i64,
}

impl<T> PageResult<T> {
    pub fn new(data: Vec<T>, total: i64, request: &PageRequest) -> Self {
        Self {
            data,
            total,
            page: request.page,
            limit: request.limit,
            last_page: last_page(total, request.limit),
        }
    }

    /// Converts the rows while keeping the pagination totals.
    pub fn map<U, F>(self, f: F) -> PageResult<U>
    where
        F: FnMut(T) -> U,
    {
        PageResult {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            last_page: self.last_page,
        }
    }
}

#[must_use]
pub fn last_page(total: i64, limit: i64) -> i64 {
    if total <= 0 || limit <= 0 {
        0
    } else {
        (total + limit - 1) / limit
    }
}
