//! Mirror of the view parameters in a shareable location descriptor.
//!
//! Three query parameters carry the view: `q` (search text), `status`
//! (omitted for `all`) and `sort` (`asc` / `desc`). Unrelated parameters in
//! the location are left alone.

use std::fmt;

use url::form_urlencoded;

use crate::query::{SortOrder, StatusFilter, ViewQuery};

pub const SEARCH_PARAM: &str = "q";
pub const STATUS_PARAM: &str = "status";
pub const SORT_PARAM: &str = "sort";

fn parse_pairs(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn first<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn is_view_key(key: &str) -> bool {
    matches!(key, SEARCH_PARAM | STATUS_PARAM | SORT_PARAM)
}

impl ViewQuery {
    /// Read view parameters from a query string (leading `?` optional).
    ///
    /// Missing or invalid values fall back to their defaults.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let pairs = parse_pairs(query);

        let search = first(&pairs, SEARCH_PARAM).unwrap_or_default().to_string();
        let status = first(&pairs, STATUS_PARAM)
            .and_then(|s| s.parse::<StatusFilter>().ok())
            .unwrap_or_default();
        let sort = first(&pairs, SORT_PARAM)
            .and_then(|s| s.parse::<SortOrder>().ok())
            .unwrap_or_default();

        Self {
            search,
            status,
            sort,
        }
    }

    /// Rewrite the view parameters onto an existing query string.
    ///
    /// Returns the encoded query without a leading `?`. Unrelated parameters
    /// keep their order; the view keys follow them as `q`, `status`, `sort`,
    /// so the result does not depend on the order values were changed in.
    /// Empty search and the `all` status are omitted; `sort` is always written.
    #[must_use]
    pub fn apply_to_query(&self, query: &str) -> String {
        let mut pairs = parse_pairs(query);
        pairs.retain(|(k, _)| !is_view_key(k));

        if !self.search.is_empty() {
            pairs.push((SEARCH_PARAM.to_string(), self.search.clone()));
        }
        if let StatusFilter::Only(status) = self.status {
            pairs.push((STATUS_PARAM.to_string(), status.as_str().to_string()));
        }
        pairs.push((SORT_PARAM.to_string(), self.sort.as_str().to_string()));

        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs.iter())
            .finish()
    }
}

/// Path plus query string of a shareable view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    /// Encoded query without the leading `?`.
    pub query: String,
    /// Fragment without the leading `#`.
    pub fragment: String,
}

impl Location {
    /// Parse `"/issues?q=bug#top"`. An empty path becomes `/`.
    #[must_use]
    pub fn parse(descriptor: &str) -> Self {
        let (rest, fragment) = descriptor.split_once('#').unwrap_or((descriptor, ""));
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
        let path = if path.is_empty() { "/" } else { path };
        Self {
            path: path.to_string(),
            query: query.to_string(),
            fragment: fragment.to_string(),
        }
    }

    #[must_use]
    pub fn with_query(&self, query: String) -> Self {
        Self {
            path: self.path.clone(),
            query,
            fragment: self.fragment.clone(),
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::parse("/")
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment)?;
        }
        Ok(())
    }
}

/// Rewrites the current location without adding a history entry.
pub trait Navigator {
    fn replace(&mut self, location: &Location);
}

/// Navigator that only remembers what it was told.
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    pub current: Option<Location>,
    pub replacements: usize,
}

impl Navigator for RecordingNavigator {
    fn replace(&mut self, location: &Location) {
        self.current = Some(location.clone());
        self.replacements += 1;
    }
}

/// Keeps [`ViewQuery`] and a [`Location`] in step.
#[derive(Debug)]
pub struct UrlSync<N: Navigator> {
    params: ViewQuery,
    location: Location,
    navigator: N,
}

impl<N: Navigator> UrlSync<N> {
    /// Initialize parameters from `location`. Nothing is replaced yet.
    pub fn new(location: Location, navigator: N) -> Self {
        let params = ViewQuery::from_query(&location.query);
        Self {
            params,
            location,
            navigator,
        }
    }

    #[must_use]
    pub const fn params(&self) -> &ViewQuery {
        &self.params
    }

    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    #[must_use]
    pub const fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.params.search = search.into();
        self.sync();
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.params.status = status;
        self.sync();
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.params.sort = sort;
        self.sync();
    }

    fn sync(&mut self) {
        let query = self.params.apply_to_query(&self.location.query);
        self.location = self.location.with_query(query);
        tracing::trace!(location = %self.location, "Replacing location");
        self.navigator.replace(&self.location);
    }
}
