//! Loading an OpenAPI document from a URL or a local file.

use crate::spec::Document;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Stripe's published OpenAPI description.
pub const DEFAULT_SPEC_URL: &str =
    "https://raw.githubusercontent.com/stripe/openapi/master/openapi/spec3.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecSource {
    Url(String),
    File(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("fetch {url}: server answered {status}")]
    Status { url: String, status: u16 },

    #[error("read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SpecSource {
    /// `http://` and `https://` locations are fetched; anything else is a path.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            SpecSource::Url(s.to_string())
        } else {
            SpecSource::File(PathBuf::from(s))
        }
    }

    pub fn load(&self, timeout: Duration) -> Result<Document, LoadError> {
        let text = match self {
            SpecSource::Url(url) => fetch(url, timeout)?,
            SpecSource::File(path) => fs::read_to_string(path).map_err(|source| LoadError::Read {
                path: path.display().to_string(),
                source,
            })?,
        };

        tracing::debug!(source = %self, bytes = text.len(), "parsing specification");
        Document::from_json_str(&text).map_err(|source| LoadError::Parse {
            origin: self.to_string(),
            source,
        })
    }
}

impl Default for SpecSource {
    fn default() -> Self {
        SpecSource::Url(DEFAULT_SPEC_URL.to_string())
    }
}

impl fmt::Display for SpecSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecSource::Url(url) => f.write_str(url),
            SpecSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Plain GET; no auth, no query parameters, no caching headers.
fn fetch(url: &str, timeout: Duration) -> Result<String, LoadError> {
    let fetch_err = |source: reqwest::Error| LoadError::Fetch {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(fetch_err)?;

    tracing::info!(url, "fetching specification");
    let response = client.get(url).send().map_err(fetch_err)?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().map_err(fetch_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::Method;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn classifies_sources() {
        assert_eq!(
            SpecSource::parse("https://example.com/spec.json"),
            SpecSource::Url("https://example.com/spec.json".to_string())
        );
        assert_eq!(
            SpecSource::parse("http://localhost:8080/openapi.json"),
            SpecSource::Url("http://localhost:8080/openapi.json".to_string())
        );
        assert_eq!(
            SpecSource::parse("./spec3.json"),
            SpecSource::File(PathBuf::from("./spec3.json"))
        );
        assert_eq!(SpecSource::default().to_string(), DEFAULT_SPEC_URL);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"paths": {{"/v1/customers": {{"get": {{}}, "post": {{}}}}}}}}"#
        )
        .unwrap();

        let source = SpecSource::File(file.path().to_path_buf());
        let doc = source.load(Duration::from_secs(1)).unwrap();
        assert_eq!(doc.paths.len(), 1);
        assert!(doc.operation("/v1/customers", Method::Post).is_some());
    }

    #[test]
    fn non_json_body_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<html>not json</html>").unwrap();

        let err = SpecSource::File(file.path().to_path_buf())
            .load(Duration::from_secs(1))
            .unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SpecSource::File(dir.path().join("absent.json"))
            .load(Duration::from_secs(1))
            .unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }), "got {err:?}");
        assert!(err.to_string().contains("absent.json"));
    }
}
