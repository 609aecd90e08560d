use std::collections::HashMap;
use std::convert::TryFrom;

use url::Url;

use crate::domain::errors::MalformedInput;

/// Read-only snapshot of the page hosting the capture form.
///
/// The embedding environment passes it in explicitly instead of the client
/// reading a browser-style global: the full page address becomes the
/// `referring_site` of the subscription, its query string carries the
/// campaign-tracking parameters.
#[derive(Clone, Debug)]
pub struct PageContext {
    url: String,
    query_params: HashMap<String, String>,
}

impl PageContext {
    pub fn new(url: String, query_params: HashMap<String, String>) -> Self {
        Self { url, query_params }
    }

    /// A context for a capture form with no known hosting page.
    pub fn unknown() -> Self {
        Self {
            url: String::new(),
            query_params: HashMap::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query_params.get(key).map(String::as_str)
    }
}

impl TryFrom<&str> for PageContext {
    type Error = MalformedInput;

    fn try_from(raw_url: &str) -> Result<Self, Self::Error> {
        let parsed = Url::parse(raw_url).map_err(|_| MalformedInput::InvalidPageUrl {
            url: raw_url.to_string(),
        })?;
        let query_params = parsed.query_pairs().into_owned().collect();
        Ok(Self {
            url: raw_url.to_string(),
            query_params,
        })
    }
}
