use container_suseconnect::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Mock RegistrationServer answering from canned responses
///
/// Product answers are keyed by regcode; the empty key stands for the
/// system credentials query used against mirrors. Every product query is
/// recorded in order.
#[derive(Clone)]
pub struct MockRegistrationServer {
    subscriptions: ServerResponse,
    products: HashMap<String, ServerResponse>,
    queries: Rc<RefCell<Vec<String>>>,
}

impl MockRegistrationServer {
    pub fn new(subscriptions: ServerResponse) -> Self {
        Self {
            subscriptions,
            products: HashMap::new(),
            queries: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Server behaving like SCC, with one active subscription per regcode
    pub fn with_regcodes(regcodes: &[&str]) -> Self {
        let entries: Vec<String> = regcodes
            .iter()
            .map(|regcode| format!(r#"{{"regcode": "{}", "status": "ACTIVE"}}"#, regcode))
            .collect();
        Self::new(ServerResponse::new(
            200,
            "200 OK",
            format!("[{}]", entries.join(",")),
        ))
    }

    /// Server behaving like an RMT/SMT mirror, which has no subscriptions
    pub fn mirror() -> Self {
        Self::new(ServerResponse::new(404, "404 Not Found", ""))
    }

    pub fn with_products(mut self, regcode: &str, body: impl Into<String>) -> Self {
        self.products.insert(
            regcode.to_string(),
            ServerResponse::new(200, "200 OK", body),
        );
        self
    }

    pub fn with_response(mut self, regcode: &str, response: ServerResponse) -> Self {
        self.products.insert(regcode.to_string(), response);
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl RegistrationServer for MockRegistrationServer {
    fn fetch_subscriptions(&self, _credentials: &Credentials) -> Result<ServerResponse> {
        Ok(self.subscriptions.clone())
    }

    fn fetch_products(
        &self,
        query: ProductQuery<'_>,
        _installed: &InstalledProduct,
    ) -> Result<ServerResponse> {
        let key = match query {
            ProductQuery::Regcode(regcode) => regcode.to_string(),
            ProductQuery::System(_) => String::new(),
        };
        self.queries.borrow_mut().push(key.clone());

        match self.products.get(&key) {
            Some(response) => Ok(response.clone()),
            None => anyhow::bail!("Mock registration server has no answer for '{}'", key),
        }
    }
}

/// Mock RegistrationServerFactory handing out a shared [`MockRegistrationServer`]
pub struct MockRegistrationServerFactory {
    server: MockRegistrationServer,
    endpoints: Rc<RefCell<Vec<RegistrationEndpoint>>>,
}

impl MockRegistrationServerFactory {
    pub fn new(server: MockRegistrationServer) -> Self {
        Self {
            server,
            endpoints: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Endpoints the use case connected to
    pub fn endpoints(&self) -> Rc<RefCell<Vec<RegistrationEndpoint>>> {
        Rc::clone(&self.endpoints)
    }
}

impl RegistrationServerFactory for MockRegistrationServerFactory {
    type Server = MockRegistrationServer;

    fn connect(&self, endpoint: &RegistrationEndpoint) -> Result<MockRegistrationServer> {
        self.endpoints.borrow_mut().push(endpoint.clone());
        Ok(self.server.clone())
    }
}
