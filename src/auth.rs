//! Credential attachment for API requests
//!
//! The client does not resolve Google credentials itself (no OAuth2 token
//! exchange, no service-account key parsing). It attaches an
//! already-resolved access token as a `Authorization: Bearer` header;
//! obtaining that token is the caller's concern (gcloud, a metadata
//! server sidecar, a token broker).

use crate::error::{Error, Result};
use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};

/// Source of the access token attached to every request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Credentials {
    /// No credentials; requests are sent unauthenticated.
    ///
    /// Useful against emulators and mock servers.
    #[default]
    Anonymous,

    /// A static access token provided directly
    Token {
        /// The bearer token value
        token: String,
    },

    /// Read the access token from an environment variable at client
    /// construction time
    Env {
        /// Name of the environment variable holding the token
        var: String,
    },
}

impl Credentials {
    /// Create static token credentials
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token {
            token: token.into(),
        }
    }

    /// Create credentials that read from an environment variable
    pub fn from_env_var(var: impl Into<String>) -> Self {
        Self::Env { var: var.into() }
    }

    /// Resolve the credentials into a ready-to-attach bearer token.
    ///
    /// Returns `None` for anonymous credentials.
    pub fn resolve(&self) -> Result<Option<String>> {
        match self {
            Self::Anonymous => Ok(None),
            Self::Token { token } => {
                if token.is_empty() {
                    return Err(Error::auth("access token is empty"));
                }
                Ok(Some(token.clone()))
            }
            Self::Env { var } => match std::env::var(var) {
                Ok(token) if !token.is_empty() => Ok(Some(token)),
                _ => Err(Error::auth(format!(
                    "environment variable '{var}' is unset or empty"
                ))),
            },
        }
    }

    /// Check whether requests will carry an Authorization header
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }
}

/// Attach a resolved bearer token to a request builder
pub fn apply(req: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => req.bearer_auth(token),
        None => req,
    }
}
