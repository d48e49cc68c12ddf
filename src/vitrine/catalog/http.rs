//! Catalog retrieval over HTTP.
//!
//! One blocking GET per load. Non-success statuses surface as
//! [`VitrineError::Load`] so the caller can tell them apart from a body that
//! failed to parse.

use super::CatalogSource;
use crate::error::{Result, VitrineError};
use crate::model::Item;

pub struct HttpSource {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            url: url.into(),
        }
    }
}

impl CatalogSource for HttpSource {
    fn fetch(&self) -> Result<Vec<Item>> {
        let response = self.client.get(&self.url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(VitrineError::Load {
                status: status.as_u16(),
            });
        }
        let body = response.text()?;
        let items: Vec<Item> = serde_json::from_str(&body)?;
        Ok(items)
    }

    fn describe(&self) -> String {
        format!("GET {}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::memory::fixtures::sample_items;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serves exactly one canned response and returns the URL to hit.
    fn serve_once(status_line: &'static str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{}/data/conteudo.json", addr)
    }

    #[test]
    fn fetches_items_on_success() {
        let url = serve_once("200 OK", serde_json::to_string(&sample_items()).unwrap());
        let items = HttpSource::new(url).fetch().unwrap();
        assert_eq!(items.len(), 6);
        assert_eq!(items[0].title, "Night Drive");
    }

    #[test]
    fn non_success_status_is_load_error() {
        let url = serve_once("404 Not Found", String::new());
        let err = HttpSource::new(url).fetch().unwrap_err();
        assert!(matches!(err, VitrineError::Load { status: 404 }));
    }

    #[test]
    fn malformed_body_is_serialization_error() {
        let url = serve_once("200 OK", "<html>oops</html>".to_string());
        let err = HttpSource::new(url).fetch().unwrap_err();
        assert!(matches!(err, VitrineError::Serialization(_)));
    }

    #[test]
    fn describes_request() {
        let source = HttpSource::new("https://example.com/items.json");
        assert_eq!(source.describe(), "GET https://example.com/items.json");
    }
}
