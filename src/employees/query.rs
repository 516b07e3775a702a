//! Employee Query Builder
//! Mission: Turn search, filter and pagination inputs into a bounded SQL query

use crate::api::error::FieldError;
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 50;

/// Which columns a search term is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterBy {
    #[default]
    All,
    Name,
    Role,
}

impl FilterBy {
    /// Exact match on `name` / `role`; anything else is [`FilterBy::All`].
    pub fn parse(value: &str) -> Self {
        match value {
            "name" => FilterBy::Name,
            "role" => FilterBy::Role,
            _ => FilterBy::All,
        }
    }
}

/// Raw `GET /employees/` query string
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub filter_by: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Validated listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeQuery {
    search: Option<String>,
    filter_by: FilterBy,
    page: u32,
    limit: u32,
}

/// SQL predicate plus its positional arguments
#[derive(Debug, Clone, PartialEq)]
pub struct SqlFilter {
    pub where_sql: String,
    pub args: Vec<Value>,
}

impl Default for EmployeeQuery {
    fn default() -> Self {
        Self {
            search: None,
            filter_by: FilterBy::All,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl EmployeeQuery {
    pub fn from_params(params: ListParams) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();

        let page = params.page.unwrap_or(DEFAULT_PAGE as i64);
        if page < 1 || page > u32::MAX as i64 {
            errors.push(FieldError::new("page", "must be greater than or equal to 1"));
        }

        let limit = params.limit.unwrap_or(DEFAULT_LIMIT as i64);
        if !(1..=MAX_LIMIT as i64).contains(&limit) {
            errors.push(FieldError::new(
                "limit",
                format!("must be between 1 and {}", MAX_LIMIT),
            ));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            search: params.search.filter(|s| !s.is_empty()),
            filter_by: params
                .filter_by
                .as_deref()
                .map(FilterBy::parse)
                .unwrap_or_default(),
            page: page as u32,
            limit: limit as u32,
        })
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = (!term.is_empty()).then_some(term);
        self
    }

    pub fn filter_by(mut self, filter_by: FilterBy) -> Self {
        self.filter_by = filter_by;
        self
    }

    #[cfg(test)]
    pub fn paginate(self, page: u32, limit: u32) -> Self {
        Self::from_params(ListParams {
            search: self.search.clone(),
            filter_by: None,
            page: Some(page as i64),
            limit: Some(limit as i64),
        })
        .map(|paged| paged.filter_by(self.filter_by))
        .expect("page and limit out of range")
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.limit as i64
    }

    /// Unicode case-insensitive literal substring predicate for the current search mode.
    ///
    /// Relies on the `casefold()` SQL function the store registers on its connection.
    pub fn filter(&self) -> SqlFilter {
        let Some(term) = self.search.as_deref() else {
            return SqlFilter {
                where_sql: String::new(),
                args: Vec::new(),
            };
        };

        let needle = Value::Text(casefold(term));
        match self.filter_by {
            FilterBy::Name => SqlFilter {
                where_sql: " WHERE instr(casefold(name), ?) > 0".to_string(),
                args: vec![needle],
            },
            FilterBy::Role => SqlFilter {
                where_sql: " WHERE instr(casefold(role), ?) > 0".to_string(),
                args: vec![needle],
            },
            FilterBy::All => SqlFilter {
                where_sql: " WHERE (instr(casefold(name), ?) > 0 OR instr(casefold(role), ?) > 0)"
                    .to_string(),
                args: vec![needle.clone(), needle],
            },
        }
    }
}

/// Case folding applied to both the search term and the searched columns.
pub fn casefold(text: &str) -> String {
    text.to_lowercase()
}
