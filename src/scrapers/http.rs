//! Shared HTTP client for feed and article requests.

use crate::config::Config;
use crate::error::CorpusError;
use reqwest::Client;
use reqwest::header::ACCEPT_LANGUAGE;
use tracing::{debug, instrument};

/// `reqwest` client carrying the configured identity, language and timeout.
///
/// Every request is a plain GET; non-2xx statuses are turned into errors so
/// callers only ever see a body or a failure.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    accept_language: String,
}

impl HttpClient {
    /// # Errors
    ///
    /// Returns [`CorpusError::Http`] if the underlying client cannot be
    /// constructed (e.g. invalid TLS config).
    pub fn new(config: &Config) -> Result<Self, CorpusError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            client,
            accept_language: config.accept_language.clone(),
        })
    }

    /// Fetch `url` and return the response body as text.
    #[instrument(level = "debug", skip(self))]
    pub async fn get_text(&self, url: &str) -> Result<String, CorpusError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT_LANGUAGE, self.accept_language.as_str())
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        debug!(bytes = body.len(), "Fetched body");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_text_sends_language_and_agent() {
        let server = MockServer::start().await;
        let config = Config {
            user_agent: "news-corpus-test/0.1".to_string(),
            accept_language: "es".to_string(),
            ..Config::default()
        };
        Mock::given(method("GET"))
            .and(path("/page"))
            .and(header("accept-language", config.accept_language.as_str()))
            .and(header("user-agent", config.user_agent.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_string("hola"))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(&config).unwrap();
        let body = client.get_text(&format!("{}/page", server.uri())).await.unwrap();
        assert_eq!(body, "hola");
    }

    #[tokio::test]
    async fn test_get_text_rejects_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = HttpClient::new(&Config::default()).unwrap();
        let result = client.get_text(&format!("{}/missing", server.uri())).await;
        assert!(matches!(result, Err(CorpusError::Http(_))));
    }
}
