use crate::ports::outbound::RegistrationServer;
use crate::registration::domain::{Credentials, Subscription};
use crate::shared::error::{logged_error, SuseConnectError};
use crate::shared::Result;

/// Resolves the registration codes available to the host
///
/// Uses SCC's `/connect/systems/subscriptions` API. RMT/SMT mirrors do not
/// implement it, in which case a single empty regcode is returned to signal
/// that products must be requested with the system credentials instead.
pub struct SubscriptionResolver;

impl SubscriptionResolver {
    /// Requests the regcodes of every non-expired subscription
    ///
    /// # Returns
    /// The regcodes in server order; `[""]` when talking to a mirror; an
    /// empty list when every subscription has expired
    ///
    /// # Errors
    /// Returns an error if:
    /// - The request cannot be sent
    /// - The server answers with a status other than 200 or 404
    /// - The body is not a list of subscriptions, or the list is empty
    pub fn resolve_regcodes<S>(server: &S, credentials: &Credentials) -> Result<Vec<String>>
    where
        S: RegistrationServer + ?Sized,
    {
        let response = server.fetch_subscriptions(credentials)?;

        if response.status == 404 {
            log::info!("Cannot fetch regcodes. Assuming it is an RMT/SMT server");
            return Ok(vec![String::new()]);
        }

        if response.status != 200 {
            return Err(logged_error(SuseConnectError::SubscriptionServer(format!(
                "Unexpected error while retrieving regcode: {}",
                response.status_line
            ))));
        }

        let subscriptions = Self::parse_subscriptions(&response.body)?;

        let mut regcodes = Vec::with_capacity(subscriptions.len());
        for subscription in subscriptions {
            if subscription.is_expired() {
                log::warn!("Skipping regCode: {} -- expired.", subscription.regcode);
            } else {
                regcodes.push(subscription.regcode);
            }
        }

        Ok(regcodes)
    }

    fn parse_subscriptions(body: &str) -> Result<Vec<Subscription>> {
        let subscriptions: Vec<Subscription> = serde_json::from_str(body).map_err(|e| {
            logged_error(SuseConnectError::Subscription(format!(
                "Can't read subscription: {}",
                e
            )))
        })?;

        if subscriptions.is_empty() {
            return Err(logged_error(SuseConnectError::Subscription(
                "Got 0 subscriptions".to_string(),
            )));
        }

        Ok(subscriptions)
    }
}
