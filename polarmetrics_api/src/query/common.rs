//! Shared query infrastructure: the [`Query`] and [`PagedQuery`] traits, [`QueryCommon`] fields, and [`SortDirection`].

use std::str::FromStr;

use url::Url;

/// Trait implemented by all query builders. Provides the request path and
/// URL serialization of the query parameters.
pub trait Query {
    /// Path of the endpoint relative to the client's base URL (e.g. `/member/congress/118/TX`).
    fn path(&self) -> String;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Query builders for Congress.gov list endpoints, which share offset/limit paging.
pub trait PagedQuery: Query {
    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the maximum number of results returned (Congress.gov caps this at 250).
    fn with_limit(mut self, limit: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().limit = Some(limit.clamp(1, MAX_LIMIT));
        self
    }

    /// Sets the number of records to skip.
    fn with_offset(mut self, offset: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().offset = Some(offset.max(0));
        self
    }
}

/// Largest page size accepted by Congress.gov list endpoints.
pub const MAX_LIMIT: i64 = 250;

/// Sort order for API results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order (oldest first).
    Asc,
    /// Descending order (newest first). This is the default.
    #[default]
    Desc,
}
impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortDirection::Asc => "asc",
                SortDirection::Desc => "desc",
            }
        )
    }
}
impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// Paging fields shared by Congress.gov list queries.
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryCommon {
    /// Records to skip. `None` uses the API default of 0.
    pub offset: Option<i64>,
    /// Records per response. `None` uses the API default of 20.
    pub limit: Option<i64>,
}

impl QueryCommon {
    /// Appends `format=json` and the paging parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().append_pair("format", "json");
        if let Some(offset) = self.offset {
            url.query_pairs_mut()
                .append_pair("offset", &offset.to_string());
        };
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        };
        url
    }
}
