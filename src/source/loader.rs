use crate::constants::MAX_DOCUMENT_BYTES;
use crate::error::{Error, Result};

/// Reads raw document content from either entry surface: a local file or a
/// fetched web page.
pub struct SourceLoader {
    http: reqwest::Client,
}

impl SourceLoader {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Read a local file into memory.
    ///
    /// The size ceiling is checked against filesystem metadata before any
    /// bytes are read, so oversized files are rejected without parsing work.
    pub async fn load_file(&self, path: &std::path::Path) -> Result<Vec<u8>> {
        let metadata = tokio::fs::metadata(path).await?;
        if metadata.len() > MAX_DOCUMENT_BYTES {
            return Err(Error::SizeExceeded {
                actual: metadata.len(),
                limit: MAX_DOCUMENT_BYTES,
            });
        }

        Ok(tokio::fs::read(path).await?)
    }

    /// Fetch a web page with a single GET request. No retries; the fetched
    /// body is held to the same size ceiling as uploaded files.
    pub async fn fetch_url(&self, url: &str) -> Result<String> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!("{} returned HTTP {}", url, status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;

        if body.len() as u64 > MAX_DOCUMENT_BYTES {
            return Err(Error::SizeExceeded {
                actual: body.len() as u64,
                limit: MAX_DOCUMENT_BYTES,
            });
        }

        Ok(body)
    }
}

impl Default for SourceLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_load_file_reads_bytes() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "hello loader").unwrap();
        file.flush().unwrap();

        let loader = SourceLoader::new();
        let bytes = loader.load_file(file.path()).await.unwrap();
        assert_eq!(bytes, b"hello loader");
    }

    #[tokio::test]
    async fn test_load_file_rejects_oversized() {
        let file = NamedTempFile::new().unwrap();
        let oversized = vec![b'x'; (MAX_DOCUMENT_BYTES + 1) as usize];
        std::fs::write(file.path(), &oversized).unwrap();

        let loader = SourceLoader::new();
        let err = loader.load_file(file.path()).await.unwrap_err();
        assert!(matches!(err, Error::SizeExceeded { .. }));
    }

    #[tokio::test]
    async fn test_load_file_missing_is_io_error() {
        let loader = SourceLoader::new();
        let err = loader
            .load_file(std::path::Path::new("/nonexistent/docsage-test.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[tokio::test]
    async fn test_fetch_url_invalid_is_fetch_error() {
        let loader = SourceLoader::new();
        let err = loader.fetch_url("not a url").await.unwrap_err();
        assert!(matches!(err, Error::Fetch(_)));
    }

    #[tokio::test]
    async fn test_fetch_url_non_success_status() {
        let url = serve_once(
            "HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        )
        .await;

        let loader = SourceLoader::new();
        let err = loader.fetch_url(&url).await.unwrap_err();
        assert!(matches!(err, Error::Fetch(_)));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_url_returns_body() {
        let body = "<html><body><p>served</p></body></html>";
        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let url = serve_once_owned(response).await;

        let loader = SourceLoader::new();
        let fetched = loader.fetch_url(&url).await.unwrap();
        assert_eq!(fetched, body);
    }

    /// Serve a single canned HTTP response on an ephemeral local port
    async fn serve_once(response: &'static str) -> String {
        serve_once_owned(response.to_string()).await
    }

    async fn serve_once_owned(response: String) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 2048];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        format!("http://{}/", addr)
    }
}
