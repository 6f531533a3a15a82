use crate::shared::error::{logged_error, SuseConnectError};
use crate::shared::Result;
use reqwest::Url;
use serde::{Deserialize, Deserializer, Serialize};

/// Query parameter RMT mirrors use to authenticate repository downloads
pub const CREDENTIALS_PARAM: &str = "credentials";

/// Name of the credentials file zypper should present to the mirror
pub const CREDENTIALS_FILE_NAME: &str = "SCCcredentials";

/// Treats an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A repository as announced by the registration server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub autorefresh: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub enabled: bool,
}

/// A product as announced by the registration server
///
/// Products own their extensions by value, so the tree has no cycles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub identifier: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub arch: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommended: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repositories: Vec<Repository>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extensions: Vec<Product>,
}

impl Product {
    /// Adds `credentials=SCCcredentials` to every repository URL of this
    /// product and all of its extensions that lacks a credentials parameter.
    ///
    /// Only needed for the single-product answers of RMT mirrors. URLs that
    /// cannot be parsed are logged and left as announced.
    pub fn add_mirror_credentials(&mut self) {
        let mut pending: Vec<&mut Product> = vec![self];

        while let Some(product) = pending.pop() {
            for repository in product.repositories.iter_mut() {
                if let Ok(url) = with_credentials_param(&repository.url) {
                    repository.url = url;
                }
            }
            pending.extend(product.extensions.iter_mut());
        }
    }
}

/// Base used to edit the query of relative repository URLs
const QUERY_BASE: &str = "http://localhost/";

fn with_credentials_param(raw: &str) -> Result<String> {
    match Url::parse(raw) {
        Ok(mut url) => {
            let query = credentials_query(url.query())?;
            url.set_query(Some(&query));
            Ok(url.to_string())
        }
        // Relative references, the empty one included, keep their path
        Err(_) if !raw.contains("://") => {
            let (rest, fragment) = match raw.find('#') {
                Some(index) => raw.split_at(index),
                None => (raw, ""),
            };
            let (path, query) = match rest.split_once('?') {
                Some((path, query)) => (path, Some(query)),
                None => (rest, None),
            };
            Ok(format!("{}?{}{}", path, credentials_query(query)?, fragment))
        }
        Err(e) => Err(logged_error(SuseConnectError::Repository(format!(
            "Unable to parse repository URL: {} - {}",
            raw, e
        )))),
    }
}

/// The query with `credentials=SCCcredentials` unless it already carries
/// a non-empty credentials parameter
fn credentials_query(query: Option<&str>) -> Result<String> {
    let mut scratch = Url::parse(QUERY_BASE)?;
    scratch.set_query(query);

    let has_credentials = scratch
        .query_pairs()
        .any(|(key, value)| key == CREDENTIALS_PARAM && !value.is_empty());
    if has_credentials {
        return Ok(query.unwrap_or_default().to_string());
    }

    let retained: Vec<(String, String)> = scratch
        .query_pairs()
        .filter(|(key, _)| key != CREDENTIALS_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    scratch.set_query(None);
    {
        let mut pairs = scratch.query_pairs_mut();
        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        pairs.append_pair(CREDENTIALS_PARAM, CREDENTIALS_FILE_NAME);
    }

    Ok(scratch.query().unwrap_or_default().to_string())
}
