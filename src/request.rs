//! Outbound GET request, with failures folded into a sentinel

use crate::constants::ERROR_SENTINEL;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// GET `url` and return the body text on a success status.
pub async fn fetch_text(client: &reqwest::Client, url: &str) -> Result<String, RequestError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(RequestError::Status(status));
    }
    Ok(response.text().await?)
}

/// GET `url` and resolve with the body, or with `"error"` on any failure.
pub async fn make_request(client: &reqwest::Client, url: &str) -> String {
    match fetch_text(client, url).await {
        Ok(body) => {
            debug!(url, len = body.len(), "Request succeeded");
            body
        }
        Err(e) => {
            debug!(url, error = %e, "Request failed");
            ERROR_SENTINEL.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn server_responding(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slowpoke.php"))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn success_body_is_returned_verbatim() {
        let server = server_responding(ResponseTemplate::new(200).set_body_string("1")).await;
        let url = format!("{}/slowpoke.php", server.uri());

        assert_eq!(make_request(&reqwest::Client::new(), &url).await, "1");
    }

    #[tokio::test]
    async fn body_is_not_trimmed_or_parsed() {
        let server =
            server_responding(ResponseTemplate::new(200).set_body_string(" \"0\"\n")).await;
        let url = format!("{}/slowpoke.php", server.uri());

        assert_eq!(make_request(&reqwest::Client::new(), &url).await, " \"0\"\n");
    }

    #[tokio::test]
    async fn non_success_status_becomes_error() {
        let server = server_responding(ResponseTemplate::new(500).set_body_string("1")).await;
        let url = format!("{}/slowpoke.php", server.uri());

        assert_eq!(make_request(&reqwest::Client::new(), &url).await, "error");
    }

    #[tokio::test]
    async fn not_found_becomes_error() {
        let server = MockServer::start().await;
        let url = format!("{}/missing", server.uri());

        let err = fetch_text(&reqwest::Client::new(), &url).await.unwrap_err();
        assert!(matches!(err, RequestError::Status(s) if s.as_u16() == 404));
        assert_eq!(make_request(&reqwest::Client::new(), &url).await, "error");
    }

    #[tokio::test]
    async fn unreachable_host_becomes_error() {
        let url = "http://127.0.0.1:1/slowpoke.php";

        let err = fetch_text(&reqwest::Client::new(), url).await.unwrap_err();
        assert!(matches!(err, RequestError::Transport(_)));
        assert_eq!(make_request(&reqwest::Client::new(), url).await, "error");
    }

    #[tokio::test]
    async fn malformed_url_becomes_error() {
        assert_eq!(make_request(&reqwest::Client::new(), "not a url").await, "error");
    }
}
