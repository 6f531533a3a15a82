use crate::registration::domain::product::null_as_default;
use serde::{Deserialize, Serialize};

/// Configuration served by the containerbuild-regionsrv sidecar
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerBuildConfig {
    #[serde(rename = "instance-data", default, deserialize_with = "null_as_default")]
    pub instance_data: String,
    #[serde(rename = "server-fqdn", default, deserialize_with = "null_as_default")]
    pub server_fqdn: String,
    #[serde(rename = "server-ip", default, deserialize_with = "null_as_default")]
    pub server_ip: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub password: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ca: String,
}

impl ContainerBuildConfig {
    /// True when the sidecar sent nothing usable. Credentials alone do not
    /// count: without a server there is nothing to talk to.
    pub fn is_empty(&self) -> bool {
        self.instance_data.is_empty()
            && self.server_fqdn.is_empty()
            && self.server_ip.is_empty()
            && self.ca.is_empty()
    }

    pub fn has_credentials(&self) -> bool {
        !(self.username.is_empty() && self.password.is_empty())
    }
}
