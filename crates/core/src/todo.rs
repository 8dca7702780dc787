//! Validation rules for the todo domain: title constraints and the
//! sort/pagination parameters of the list endpoint.
//!
//! All checks here run before any SQL is issued, so invalid input never
//! reaches the repository layer.

use crate::error::CoreError;

/// Maximum title length in characters, counted after trimming.
pub const TITLE_MAX_CHARS: usize = 200;

/// Default page size for the list endpoint.
pub const DEFAULT_LIMIT: i64 = 50;

/// Maximum page size for the list endpoint.
pub const MAX_LIMIT: i64 = 200;

/// Trim a raw title and enforce the 1..=200 character constraint.
///
/// Returns the trimmed title on success.
pub fn validate_title(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    let chars = trimmed.chars().count();
    if chars == 0 {
        return Err(CoreError::validation(
            "title",
            "title must not be empty or all whitespace",
        ));
    }
    if chars > TITLE_MAX_CHARS {
        return Err(CoreError::validation(
            "title",
            format!("title must be at most {TITLE_MAX_CHARS} characters, got {chars}"),
        ));
    }
    Ok(trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Sort / pagination parameters
// ---------------------------------------------------------------------------

/// Sort key for the list endpoint. Defaults to `deadline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Deadline,
    CreatedAt,
    Title,
}

impl SortBy {
    /// Parse the `sort_by` query value. `None` selects the default.
    pub fn parse(value: Option<&str>) -> Result<Self, CoreError> {
        match value {
            None => Ok(Self::default()),
            Some("deadline") => Ok(SortBy::Deadline),
            Some("created_at") => Ok(SortBy::CreatedAt),
            Some("title") => Ok(SortBy::Title),
            Some(other) => Err(CoreError::validation(
                "sort_by",
                format!("expected one of deadline, created_at, title; got '{other}'"),
            )),
        }
    }
}

/// Sort direction for the list endpoint. Defaults to ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse the `order` query value. `None` selects the default.
    pub fn parse(value: Option<&str>) -> Result<Self, CoreError> {
        match value {
            None => Ok(Self::default()),
            Some("asc") => Ok(SortOrder::Asc),
            Some("desc") => Ok(SortOrder::Desc),
            Some(other) => Err(CoreError::validation(
                "order",
                format!("expected asc or desc, got '{other}'"),
            )),
        }
    }

    /// SQL keyword for this direction.
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// A fully validated list query: sort key, direction, and page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub sort_by: SortBy,
    pub order: SortOrder,
    pub limit: i64,
    pub offset: i64,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            sort_by: SortBy::default(),
            order: SortOrder::default(),
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl ListQuery {
    /// Validate raw query parameters into a [`ListQuery`].
    ///
    /// Out-of-range `limit`/`offset` values are rejected rather than
    /// clamped, matching the contract of the list endpoint.
    pub fn from_parts(
        sort_by: Option<&str>,
        order: Option<&str>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Self, CoreError> {
        let sort_by = SortBy::parse(sort_by)?;
        let order = SortOrder::parse(order)?;

        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(CoreError::validation(
                "limit",
                format!("limit must be between 1 and {MAX_LIMIT}, got {limit}"),
            ));
        }

        let offset = offset.unwrap_or(0);
        if offset < 0 {
            return Err(CoreError::validation(
                "offset",
                format!("offset must be non-negative, got {offset}"),
            ));
        }

        Ok(Self {
            sort_by,
            order,
            limit,
            offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_title_trims_whitespace() {
        assert_eq!(validate_title("  Buy milk  ").unwrap(), "Buy milk");
    }

    #[test]
    fn validate_title_rejects_empty_and_whitespace_only() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   \t\n ").is_err());
    }

    #[test]
    fn validate_title_accepts_exactly_max_chars() {
        let title = "x".repeat(TITLE_MAX_CHARS);
        assert_eq!(validate_title(&title).unwrap(), title);
    }

    #[test]
    fn validate_title_rejects_over_max_chars() {
        let title = "x".repeat(TITLE_MAX_CHARS + 1);
        let err = validate_title(&title).unwrap_err();
        match err {
            CoreError::Validation { field, .. } => assert_eq!(field, "title"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn validate_title_counts_chars_not_bytes() {
        // 200 multi-byte characters are within the limit.
        let title = "ü".repeat(TITLE_MAX_CHARS);
        assert!(validate_title(&title).is_ok());
    }

    #[test]
    fn list_query_defaults() {
        let q = ListQuery::from_parts(None, None, None, None).unwrap();
        assert_eq!(q.sort_by, SortBy::Deadline);
        assert_eq!(q.order, SortOrder::Asc);
        assert_eq!(q.limit, DEFAULT_LIMIT);
        assert_eq!(q.offset, 0);
    }

    #[test]
    fn list_query_rejects_unknown_sort_field() {
        let err = ListQuery::from_parts(Some("priority"), None, None, None).unwrap_err();
        match err {
            CoreError::Validation { field, .. } => assert_eq!(field, "sort_by"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn list_query_rejects_unknown_order() {
        let err = ListQuery::from_parts(None, Some("descending"), None, None).unwrap_err();
        match err {
            CoreError::Validation { field, .. } => assert_eq!(field, "order"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn list_query_limit_bounds() {
        assert!(ListQuery::from_parts(None, None, Some(0), None).is_err());
        assert!(ListQuery::from_parts(None, None, Some(MAX_LIMIT + 1), None).is_err());
        assert!(ListQuery::from_parts(None, None, Some(1), None).is_ok());
        assert!(ListQuery::from_parts(None, None, Some(MAX_LIMIT), None).is_ok());
    }

    #[test]
    fn list_query_rejects_negative_offset() {
        let err = ListQuery::from_parts(None, None, None, Some(-1)).unwrap_err();
        match err {
            CoreError::Validation { field, .. } => assert_eq!(field, "offset"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
