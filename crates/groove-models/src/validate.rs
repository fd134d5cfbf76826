//! Client-side input validation.

use thiserror::Error;
use url::Url;

/// Why an input was rejected before any request was made.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("not a well-formed URL: {0}")]
    Malformed(String),

    #[error("unsupported scheme '{0}', only http and https are accepted")]
    UnsupportedScheme(String),

    #[error("URL has no host")]
    MissingHost,
}

/// Validate that an image source is a well-formed absolute HTTP(S) URL.
///
/// Invalid input blocks submission locally; no request is issued.
pub fn validate_image_url(input: &str) -> Result<Url, ValidationError> {
    let url = Url::parse(input).map_err(|e| ValidationError::Malformed(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(ValidationError::UnsupportedScheme(other.to_string())),
    }

    if url.host_str().is_none() {
        return Err(ValidationError::MissingHost);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_image_url("http://example.com/dog.png").is_ok());
        assert!(validate_image_url("https://cdn.example.com/a/b.jpg?w=640").is_ok());
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(matches!(
            validate_image_url("not a url"),
            Err(ValidationError::Malformed(_))
        ));
        assert!(matches!(
            validate_image_url("example.com/cat.jpg"),
            Err(ValidationError::Malformed(_))
        ));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(matches!(
            validate_image_url("ftp://example.com/cat.jpg"),
            Err(ValidationError::UnsupportedScheme(_))
        ));
        // Data URIs are a backend concern, never user input
        assert!(matches!(
            validate_image_url("data:image/png;base64,AAAA"),
            Err(ValidationError::UnsupportedScheme(_))
        ));
    }
}
