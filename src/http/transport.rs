use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::HttpError;
use crate::metrics::RequestErrorKind;

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("getbench/", env!("CARGO_PKG_VERSION"));

/// Performs a single GET and reports whether it completed at the transport level.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues one GET against `url`, reading the response to completion.
    ///
    /// # Errors
    ///
    /// Returns the kind of transport failure when the request cannot be completed.
    async fn get(&self, url: &Url) -> Result<(), RequestErrorKind>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransportSettings {
    pub request_timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a client with proxies disabled. reqwest places no cap on
    /// concurrent connections per host, so the pool is left at its defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend or client cannot be initialised.
    pub fn new(settings: &TransportSettings) -> Result<Self, HttpError> {
        let mut builder = Client::builder()
            .no_proxy()
            .user_agent(DEFAULT_USER_AGENT);

        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|source| HttpError::BuildClientFailed { source })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<(), RequestErrorKind> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|err| classify(&err))?;
        // Status codes are not inspected; only the body transfer can still fail.
        response.bytes().await.map_err(|err| classify(&err))?;
        Ok(())
    }
}

/// Returns a factory that builds a fresh [`ReqwestTransport`] for each worker.
#[must_use]
pub fn reqwest_transport_factory(
    settings: TransportSettings,
) -> impl Fn(usize) -> Result<ReqwestTransport, HttpError> + Send + Sync + 'static {
    move |_worker| ReqwestTransport::new(&settings)
}

fn classify(err: &reqwest::Error) -> RequestErrorKind {
    if err.is_timeout() {
        RequestErrorKind::Timeout
    } else if err.is_connect() {
        RequestErrorKind::Connect
    } else {
        RequestErrorKind::Other
    }
}
