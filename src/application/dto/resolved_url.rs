use crate::shared::error::{logged_error, SuseConnectError};
use crate::shared::Result;
use reqwest::Url;

/// Password placeholder used whenever the URL ends up in the log
const MASKED_PASSWORD: &str = "XXXX";

/// Repository URL resolved for the zypper URL resolver plugin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrl {
    pub server_fqdn: String,
    pub username: String,
    pub password: String,
    pub path: String,
    pub instance_data: String,
}

impl ResolvedUrl {
    fn build(&self, password: &str) -> Result<String> {
        let invalid = |details: String| {
            logged_error(SuseConnectError::UrlResolver(format!(
                "could not build URL for {}: {}",
                self.server_fqdn, details
            )))
        };

        let mut url = Url::parse(&format!("https://{}", self.server_fqdn))
            .map_err(|e| invalid(e.to_string()))?;
        url.set_path(&self.path);
        url.set_username(&self.username)
            .and_then(|()| url.set_password(Some(password)))
            .map_err(|()| invalid("URL cannot carry credentials".to_string()))?;

        let mut built = url.to_string();
        // No path means no trailing slash either
        if self.path.is_empty() && built.ends_with('/') {
            built.pop();
        }
        Ok(built)
    }

    /// `https://<user>:<password>@<fqdn><path>`
    ///
    /// # Errors
    /// Returns an error if the server name does not form a valid URL
    pub fn url(&self) -> Result<String> {
        self.build(&self.password)
    }

    /// Same as [`ResolvedUrl::url`] with the password masked
    pub fn masked_url(&self) -> Result<String> {
        self.build(MASKED_PASSWORD)
    }
}
