use std::time::Duration;

use crate::error::FetchError;

pub const DEFAULT_ENDPOINT: &str = "https://fakestoreapi.in/api/products";

/// Where the raw catalog body comes from.
pub trait ProductSource {
    fn fetch(&self) -> Result<String, FetchError>;
}

/// Blocking `GET` against a fixed catalog endpoint.
#[derive(Clone)]
pub struct HttpSource {
    endpoint: String,
    agent: ureq::Agent,
}

impl HttpSource {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            endpoint: endpoint.into(),
            agent: builder.build(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ProductSource for HttpSource {
    fn fetch(&self) -> Result<String, FetchError> {
        tracing::debug!("GET {}", self.endpoint);
        let response = self.agent.get(&self.endpoint).call().map_err(|e| match e {
            ureq::Error::Status(code, _) => FetchError::Network(format!("HTTP status {code}")),
            ureq::Error::Transport(transport) => FetchError::Network(transport.to_string()),
        })?;
        response
            .into_string()
            .map_err(|e| FetchError::Network(format!("reading body: {e}")))
    }
}
