//! Free text to navigable URL.
//!
//! The open-family commands accept anything: a full URL, a bare domain, a
//! search query, or a query prefixed with a configured engine name. This
//! module decides which it is, using the `search` section of Settings.

use url::Url;

use crate::settings::SearchSettings;

/// Resolve the text typed after `open`/`tabopen`/`winopen` to a URL.
///
/// In order: a parseable URL with a host (or `about:` page) is taken as-is;
/// a dotted, whitespace-free token is promoted to `http://`; a leading token
/// matching a configured engine routes the rest of the text to that engine;
/// anything else goes to the default engine.
pub fn search_url(keywords: &str, search: &SearchSettings) -> String {
    let trimmed = keywords.trim();

    if let Ok(u) = Url::parse(trimmed) {
        if u.has_host() || u.scheme() == "about" {
            return u.into();
        }
    }
    if trimmed.contains('.') && !trimmed.contains(char::is_whitespace) {
        return format!("http://{}", trimmed);
    }

    let (engine, query) = match trimmed.split_once(char::is_whitespace) {
        Some((first, rest)) if search.engines.contains_key(first) => (first, rest.trim()),
        _ => (search.default_engine.as_str(), trimmed),
    };
    match search.engines.get(engine) {
        Some(template) => template.replacen("{}", &encode(query), 1),
        None => {
            tracing::warn!(engine, "search engine has no template; passing text through");
            trimmed.to_string()
        }
    }
}

/// Percent-encode a query for the `{}` slot of an engine template.
fn encode(query: &str) -> String {
    url::form_urlencoded::byte_serialize(query.as_bytes()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
