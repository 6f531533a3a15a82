use serde::Deserialize;

/// Status SCC reports for subscriptions that can no longer be used
const EXPIRED_STATUS: &str = "EXPIRED";

/// A subscription entry of `/connect/systems/subscriptions`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Subscription {
    #[serde(default)]
    pub regcode: String,
    #[serde(default)]
    pub status: String,
}

impl Subscription {
    pub fn is_expired(&self) -> bool {
        self.status.eq_ignore_ascii_case(EXPIRED_STATUS)
    }
}
