//! Blocking HTTP transport seam and its reqwest implementation.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Failures that happen before a complete response is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    Timeout(String),
    Io(String),
}

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout(message) => write!(f, "timeout: {message}"),
            Self::Io(message) => write!(f, "i/o: {message}"),
        }
    }
}

impl Error for TransportError {}

/// Sends one JSON POST and returns the status with the full body.
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    fn post(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[cfg(any(feature = "provider-openai", feature = "provider-claude"))]
pub use reqwest_transport::ReqwestTransport;

#[cfg(any(feature = "provider-openai", feature = "provider-claude"))]
mod reqwest_transport {
    use std::time::Duration;

    use reqwest::blocking::Client;
    use reqwest::header::CONTENT_TYPE;

    use super::{HttpRequest, HttpResponse, HttpTransport, TransportError};
    use crate::GatewayError;

    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: Client,
    }

    impl ReqwestTransport {
        /// `read_timeout` bounds the whole exchange once connected.
        pub fn new(connect_timeout: Duration, read_timeout: Duration) -> Result<Self, GatewayError> {
            let client = Client::builder()
                .connect_timeout(connect_timeout)
                .timeout(read_timeout)
                .build()
                .map_err(|err| {
                    GatewayError::config(format!("failed to build HTTP client: {err}"))
                        .with_cause(err)
                })?;

            Ok(Self { client })
        }

        pub fn from_client(client: Client) -> Self {
            Self { client }
        }
    }

    impl HttpTransport for ReqwestTransport {
        fn post(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            let mut builder = self
                .client
                .post(request.url.as_str())
                .header(CONTENT_TYPE, "application/json");
            for (name, value) in &request.headers {
                builder = builder.header(*name, value.as_str());
            }

            let response = builder.body(request.body).send().map_err(map_error)?;
            let status = response.status().as_u16();
            let body = response.text().map_err(map_error)?;

            Ok(HttpResponse { status, body })
        }
    }

    fn map_error(err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else {
            TransportError::Io(err.to_string())
        }
    }
}
