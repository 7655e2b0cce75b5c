//! Listing query planning.
//!
//! Every listing endpoint is described by a static [`EntityQuerySpec`]: which table to
//! read, which columns a caller may search and sort on, and the default ordering.
//! [`build`] combines a spec with a normalized [`PageRequest`] into a [`ListingPlan`]
//! holding two parameterized statements, one for the page of rows and one for the
//! total count.
//!
//! Caller-supplied text never reaches the SQL string. Search text is always a bound
//! parameter and sort keys are resolved through the spec's whitelist, so the only
//! identifiers that appear in the generated SQL come from `'static` spec data.
//!
//! # Example
//!
//! ```
//! use alumnet_core::pagination::PaginationRequest;
//! use alumnet_core::query::{build, BindValue, EntityQuerySpec, SortDirection, SortSpec};
//!
//! const BOOKS: EntityQuerySpec = EntityQuerySpec {
//!     select: "id, title",
//!     from: "books",
//!     join: None,
//!     key_column: "id",
//!     searchable: &["title"],
//!     sortable: &[("title", "title"), ("created_at", "created_at")],
//!     default_sort: SortSpec::new("created_at", SortDirection::Desc),
//! };
//!
//! let request = PaginationRequest {
//!     search: Some("rust".into()),
//!     sort: Some("title:asc".into()),
//!     ..Default::default()
//! }
//! .normalize();
//!
//! let plan = build(&request, &BOOKS);
//! assert_eq!(
//!     plan.data.sql,
//!     "SELECT id, title FROM books WHERE (title ILIKE $1) \
//!      ORDER BY title ASC, id ASC LIMIT $2 OFFSET $3"
//! );
//! assert_eq!(plan.count.binds, vec![BindValue::Text("%rust%".into())]);
//! ```

use std::fmt;

use crate::pagination::PageRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// `asc` in any case selects ascending; every other token, including none, is
    /// descending.
    #[must_use]
    pub fn parse(token: Option<&str>) -> Self {
        match token {
            Some(t) if t.trim().eq_ignore_ascii_case("asc") => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }

    #[must_use]
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// A resolved, whitelisted ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: &'static str,
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn new(column: &'static str, direction: SortDirection) -> Self {
        Self { column, direction }
    }
}

/// Static description of how an entity may be listed.
#[derive(Debug, Clone, Copy)]
pub struct EntityQuerySpec {
    /// Column list for the data query.
    pub select: &'static str,
    /// Base table, optionally with an alias (`pekerjaan p`).
    pub from: &'static str,
    /// Join needed by cross-entity search columns. Only applied while searching.
    pub join: Option<&'static str>,
    /// Unique column appended to every ORDER BY so paging is stable.
    pub key_column: &'static str,
    pub searchable: &'static [&'static str],
    /// Accepted sort key to real column.
    pub sortable: &'static [(&'static str, &'static str)],
    pub default_sort: SortSpec,
}

impl EntityQuerySpec {
    /// Resolves a raw `field:direction` string against the whitelist.
    ///
    /// An empty string yields the default sort. An unknown key falls back to the
    /// default column but keeps the requested direction.
    #[must_use]
    pub fn resolve_sort(&self, raw: &str) -> SortSpec {
        let raw = raw.trim();
        if raw.is_empty() {
            return self.default_sort;
        }

        // Segments after the direction are ignored.
        let mut parts = raw.split(':');
        let key = parts.next().unwrap_or_default().trim();
        let direction = SortDirection::parse(parts.next());

        let column = self
            .sortable
            .iter()
            .find(|(accepted, _)| accepted.eq_ignore_ascii_case(key))
            .map(|(_, column)| *column)
            .unwrap_or(self.default_sort.column);

        SortSpec { column, direction }
    }
}

/// A value bound to a positional parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Text(String),
    Int(i64),
}

/// SQL text plus the values for its `$n` placeholders, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    pub sql: String,
    pub binds: Vec<BindValue>,
}

/// Data and count statements sharing the same FROM, JOIN and WHERE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPlan {
    pub data: QueryPlan,
    pub count: QueryPlan,
}

/// Escapes `\`, `%` and `_` so the text matches literally inside a LIKE pattern.
#[must_use]
pub fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Builds the data and count plans for one listing request. Never fails.
#[must_use]
pub fn build(request: &PageRequest, spec: &EntityQuerySpec) -> ListingPlan {
    let mut source = format!("FROM {}", spec.from);
    let mut binds = Vec::new();

    if request.has_search() && !spec.searchable.is_empty() {
        if let Some(join) = spec.join {
            source.push(' ');
            source.push_str(join);
        }

        binds.push(BindValue::Text(format!("%{}%", escape_like(&request.search))));
        let predicate = spec
            .searchable
            .iter()
            .map(|column| format!("{column} ILIKE $1"))
            .collect::<Vec<_>>()
            .join(" OR ");
        source.push_str(&format!(" WHERE ({predicate})"));
    }

    let count = QueryPlan {
        sql: format!("SELECT COUNT(*) {source}"),
        binds: binds.clone(),
    };

    let sort = spec.resolve_sort(&request.sort);
    let mut order = format!("{} {}", sort.column, sort.direction);
    if sort.column != spec.key_column {
        order.push_str(&format!(", {} {}", spec.key_column, sort.direction));
    }

    let limit_idx = binds.len() + 1;
    let offset_idx = binds.len() + 2;
    binds.push(BindValue::Int(request.limit));
    binds.push(BindValue::Int(request.offset()));

    let data = QueryPlan {
        sql: format!(
            "SELECT {} {source} ORDER BY {order} LIMIT ${limit_idx} OFFSET ${offset_idx}",
            spec.select
        ),
        binds,
    };

    ListingPlan { data, count }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::PaginationRequest;

    const PEOPLE: EntityQuerySpec = EntityQuerySpec {
        select: "id, nim, nama, created_at",
        from: "people",
        join: None,
        key_column: "id",
        searchable: &["nim", "nama"],
        sortable: &[("nim", "nim"), ("nama", "nama"), ("created_at", "created_at")],
        default_sort: SortSpec::new("created_at", SortDirection::Desc),
    };

    const JOBS: EntityQuerySpec = EntityQuerySpec {
        select: "j.id, j.title",
        from: "jobs j",
        join: Some("JOIN people p ON j.person_id = p.id"),
        key_column: "j.id",
        searchable: &["j.title", "p.nama"],
        sortable: &[("title", "j.title"), ("created_at", "j.created_at")],
        default_sort: SortSpec::new("j.created_at", SortDirection::Desc),
    };

    fn page(sort: &str, search: &str) -> PageRequest {
        PaginationRequest {
            sort: Some(sort.to_string()),
            search: Some(search.to_string()),
            ..Default::default()
        }
        .normalize()
    }

    #[test]
    fn test_default_plan() {
        let plan = build(&PageRequest::default(), &PEOPLE);
        assert_eq!(
            plan.data.sql,
            "SELECT id, nim, nama, created_at FROM people \
             ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2"
        );
        assert_eq!(plan.data.binds, vec![BindValue::Int(10), BindValue::Int(0)]);
        assert_eq!(plan.count.sql, "SELECT COUNT(*) FROM people");
        assert!(plan.count.binds.is_empty());
    }

    #[test]
    fn test_search_plan_binds_pattern() {
        let plan = build(&page("nama:asc", "Budi"), &PEOPLE);
        assert_eq!(
            plan.data.sql,
            "SELECT id, nim, nama, created_at FROM people \
             WHERE (nim ILIKE $1 OR nama ILIKE $1) \
             ORDER BY nama ASC, id ASC LIMIT $2 OFFSET $3"
        );
        assert_eq!(
            plan.data.binds,
            vec![
                BindValue::Text("%Budi%".to_string()),
                BindValue::Int(10),
                BindValue::Int(0),
            ]
        );
        assert_eq!(
            plan.count.sql,
            "SELECT COUNT(*) FROM people WHERE (nim ILIKE $1 OR nama ILIKE $1)"
        );
        assert_eq!(plan.count.binds, vec![BindValue::Text("%Budi%".to_string())]);
    }

    #[test]
    fn test_search_text_never_in_sql() {
        let hostile = "x' OR 1=1; DROP TABLE people; --";
        let plan = build(&page("nama:asc", hostile), &PEOPLE);
        assert!(!plan.data.sql.contains(hostile));
        assert!(!plan.count.sql.contains(hostile));
        assert!(!plan.data.sql.contains("DROP"));
    }

    #[test]
    fn test_hostile_sort_falls_back_to_default_column() {
        let plan = build(&page("nama; DROP TABLE people:asc", ""), &PEOPLE);
        assert!(!plan.data.sql.contains("DROP"));
        assert!(plan.data.sql.contains("ORDER BY created_at ASC, id ASC"));

        let plan = build(&page("nama:asc; DELETE FROM people", ""), &PEOPLE);
        assert!(!plan.data.sql.contains("DELETE"));
        assert!(plan.data.sql.contains("ORDER BY nama DESC, id DESC"));
    }

    #[test]
    fn test_like_metacharacters_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");

        let plan = build(&page("", "100%"), &PEOPLE);
        assert_eq!(plan.count.binds, vec![BindValue::Text("%100\\%%".to_string())]);
    }

    #[test]
    fn test_sort_resolution() {
        let cases = vec![
            ("nama:asc", "nama", SortDirection::Asc),
            ("NAMA:ASC", "nama", SortDirection::Asc),
            (" nim : Asc ", "nim", SortDirection::Asc),
            ("nama:desc", "nama", SortDirection::Desc),
            ("nama:sideways", "nama", SortDirection::Desc),
            ("nama", "nama", SortDirection::Desc),
            ("nama:", "nama", SortDirection::Desc),
            ("nama:asc:extra", "nama", SortDirection::Asc),
            ("nama:desc:asc", "nama", SortDirection::Desc),
            ("password_hash:asc", "created_at", SortDirection::Asc),
            (":asc", "created_at", SortDirection::Asc),
            ("", "created_at", SortDirection::Desc),
        ];

        for (raw, column, direction) in cases {
            assert_eq!(
                PEOPLE.resolve_sort(raw),
                SortSpec::new(column, direction),
                "sort {raw:?}"
            );
        }
    }

    #[test]
    fn test_sort_on_key_column_has_no_duplicate_tiebreak() {
        const BY_ID: EntityQuerySpec = EntityQuerySpec {
            sortable: &[("id", "id")],
            ..PEOPLE
        };
        let plan = build(&page("id:asc", ""), &BY_ID);
        assert!(plan.data.sql.contains("ORDER BY id ASC LIMIT $1 OFFSET $2"));
    }

    #[test]
    fn test_join_only_applied_when_searching() {
        let plan = build(&page("title:asc", ""), &JOBS);
        assert!(!plan.data.sql.contains("JOIN"));
        assert!(!plan.count.sql.contains("JOIN"));

        let plan = build(&page("title:asc", "engineer"), &JOBS);
        assert_eq!(
            plan.count.sql,
            "SELECT COUNT(*) FROM jobs j JOIN people p ON j.person_id = p.id \
             WHERE (j.title ILIKE $1 OR p.nama ILIKE $1)"
        );
        assert!(plan.data.sql.starts_with(
            "SELECT j.id, j.title FROM jobs j JOIN people p ON j.person_id = p.id WHERE"
        ));
        assert!(plan.data.sql.ends_with("ORDER BY j.title ASC, j.id ASC LIMIT $2 OFFSET $3"));
    }

    #[test]
    fn test_limit_and_offset_binds() {
        let request = PaginationRequest {
            page: Some(3),
            limit: Some(500),
            ..Default::default()
        }
        .normalize();
        let plan = build(&request, &PEOPLE);
        assert_eq!(plan.data.binds, vec![BindValue::Int(100), BindValue::Int(200)]);
    }

    #[test]
    fn test_count_and_data_share_predicate() {
        let plan = build(&page("nim:asc", "2019"), &PEOPLE);
        let where_clause = "WHERE (nim ILIKE $1 OR nama ILIKE $1)";
        assert!(plan.data.sql.contains(where_clause));
        assert!(plan.count.sql.contains(where_clause));
        assert_eq!(plan.data.binds[0], plan.count.binds[0]);
    }
}
