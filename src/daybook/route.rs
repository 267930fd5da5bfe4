//! URL routes into the journal.
//!
//! External callers reach the journal through two routes: `journal/open`
//! and `journal/append?text=...`. Routes are accepted bare
//! (`journal/open`), with a leading slash, or as full `daybook://` URLs;
//! the query text is percent-decoded. An absent or empty `text` appends
//! an empty string, it is not an error.

use crate::error::{DaybookError, Result};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Open,
    Append { text: String },
}

pub fn parse(raw: &str) -> Result<Route> {
    let base = Url::parse("daybook:///").expect("static base URL");
    let url = base
        .join(raw.trim_start_matches('/'))
        .map_err(|e| DaybookError::Route(format!("{}: {}", raw, e)))?;

    match url.path() {
        "/journal/open" => Ok(Route::Open),
        "/journal/append" => {
            let text = url
                .query_pairs()
                .find(|(key, _)| key == "text")
                .map(|(_, value)| value.into_owned())
                .unwrap_or_default();
            Ok(Route::Append { text })
        }
        other => Err(DaybookError::Route(format!(
            "Unknown route: {}",
            other.trim_start_matches('/')
        ))),
    }
}
