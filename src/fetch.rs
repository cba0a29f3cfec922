use std::time::Duration;

use reqwest::blocking::Client;
use tracing::info;

use crate::error::CollectError;

/// Fetches the raw HTML behind a URL.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String, CollectError>;
}

/// Plain blocking GET, no retries, client default headers.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String, CollectError> {
        info!("Fetching {}", url);
        let network = |e: reqwest::Error| CollectError::Network {
            url: url.to_string(),
            reason: e.to_string(),
        };

        self.client
            .get(url)
            .send()
            .and_then(|res| res.error_for_status())
            .and_then(|res| res.text())
            .map_err(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    fn local_fetcher(timeout: Duration) -> HttpFetcher {
        let client = Client::builder()
            .no_proxy()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .unwrap();
        HttpFetcher { client }
    }

    #[test]
    fn silent_server_times_out_as_network_error() {
        // Accepted by the backlog but never answered.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());

        let fetcher = local_fetcher(Duration::from_millis(500));
        let err = fetcher.get(&url).unwrap_err();
        assert!(err.is_network(), "unexpected error: {err}");
        drop(listener);
    }

    #[test]
    fn error_status_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/missing", listener.local_addr().unwrap());

        let server = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            stream
                .write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                .unwrap();
        });

        let fetcher = local_fetcher(Duration::from_secs(5));
        let err = fetcher.get(&url).unwrap_err();
        assert!(err.is_network());
        assert!(err.to_string().contains("404"));
        server.join().unwrap();
    }

    #[test]
    fn ok_response_returns_body() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());

        let server = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            let body = "<p>ok</p>";
            let res = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            stream.write_all(res.as_bytes()).unwrap();
        });

        let fetcher = local_fetcher(Duration::from_secs(5));
        assert_eq!(fetcher.get(&url).unwrap(), "<p>ok</p>");
        server.join().unwrap();
    }
}
