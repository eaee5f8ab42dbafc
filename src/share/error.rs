//! Share link error types.

use thiserror::Error;

/// Errors raised before a share link is produced.
#[derive(Debug, Error)]
pub enum ShareError {
    /// Target name outside the supported set.
    #[error("unknown share target `{name}`")]
    InvalidTarget { name: String },

    #[error("invalid share request: {0}")]
    InvalidRequest(#[from] RequestError),
}

/// Why a [`ShareRequest`](super::ShareRequest) was rejected.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("url is missing")]
    MissingUrl,

    #[error("`{url}` is not an absolute URL")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("`{url}` contains {ch:?}, which must be percent-encoded")]
    IllegalCharacter { url: String, ch: char },

    #[error("`{url}` needs `//` after the scheme")]
    MissingAuthority { url: String },

    #[error("scheme `{scheme}` not supported, must be http or https")]
    UnsupportedScheme { scheme: String },

    #[error("`{url}` has no host")]
    MissingHost { url: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShareError::InvalidTarget {
            name: "myspace".into(),
        };
        assert_eq!(err.to_string(), "unknown share target `myspace`");

        let err = ShareError::from(RequestError::MissingUrl);
        assert_eq!(err.to_string(), "invalid share request: url is missing");

        let err = ShareError::from(RequestError::UnsupportedScheme {
            scheme: "ftp".into(),
        });
        assert!(err.to_string().contains("`ftp`"));
    }

    #[test]
    fn test_malformed_keeps_source() {
        use std::error::Error as _;

        let err = RequestError::MalformedUrl {
            url: "nope".into(),
            source: url::ParseError::RelativeUrlWithoutBase,
        };
        assert!(err.source().is_some());
    }
}
