//! Caller credentials for the todo routes.
//!
//! Handlers ask an [`HttpAuth`] collaborator for the request's credentials,
//! naming the principal kinds they accept. The shipped [`TokenAuth`] resolves
//! bearer tokens through a static table, or treats every caller as a guest
//! user when no table is configured.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};

/// Entity ref of the caller in guest mode.
pub const GUEST_USER_REF: &str = "user:development/guest";

/// Identity behind a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Principal {
    /// A signed-in user, e.g. `user:default/alice`.
    User { user_entity_ref: String },
    /// Another service, e.g. a CI job.
    Service { subject: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrincipalKind {
    User,
    Service,
}

impl fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrincipalKind::User => f.write_str("user"),
            PrincipalKind::Service => f.write_str("service"),
        }
    }
}

impl Principal {
    /// Parse `user:<namespace>/<name>` or `service:<subject>`.
    pub fn parse(reference: &str) -> Option<Self> {
        if let Some(subject) = reference.strip_prefix("service:") {
            return (!subject.is_empty()).then(|| Principal::Service {
                subject: subject.to_string(),
            });
        }
        reference
            .strip_prefix("user:")
            .filter(|name| !name.is_empty())
            .map(|_| Principal::User {
                user_entity_ref: reference.to_string(),
            })
    }

    pub fn guest() -> Self {
        Principal::User {
            user_entity_ref: GUEST_USER_REF.to_string(),
        }
    }

    pub fn kind(&self) -> PrincipalKind {
        match self {
            Principal::User { .. } => PrincipalKind::User,
            Principal::Service { .. } => PrincipalKind::Service,
        }
    }

    /// Stable reference string (`user:…` or `service:…`).
    pub fn reference(&self) -> String {
        match self {
            Principal::User { user_entity_ref } => user_entity_ref.clone(),
            Principal::Service { subject } => format!("service:{subject}"),
        }
    }
}

/// Credentials attached to a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub principal: Principal,
}

/// Trait for resolving caller credentials from request headers.
#[async_trait]
pub trait HttpAuth: Send + Sync {
    /// Resolve credentials, rejecting principals whose kind is not in `allow`.
    async fn credentials(
        &self,
        headers: &HeaderMap,
        allow: &[PrincipalKind],
    ) -> ApiResult<Credentials>;
}

/// Static bearer-token authentication.
pub struct TokenAuth {
    tokens: HashMap<String, Principal>,
}

impl TokenAuth {
    pub fn new(tokens: HashMap<String, Principal>) -> Self {
        Self { tokens }
    }

    /// Guest mode: every caller is [`GUEST_USER_REF`].
    pub fn guest() -> Self {
        Self::new(HashMap::new())
    }

    pub fn is_guest(&self) -> bool {
        self.tokens.is_empty()
    }

    fn resolve(&self, headers: &HeaderMap) -> ApiResult<Principal> {
        if self.is_guest() {
            return Ok(Principal::guest());
        }

        let header = headers
            .get(AUTHORIZATION)
            .ok_or_else(|| ApiError::Unauthorized("missing bearer token".into()))?;
        let token = header
            .to_str()
            .ok()
            .and_then(|v| v.split_once(' '))
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
            .map(|(_, token)| token.trim())
            .ok_or_else(|| ApiError::Unauthorized("malformed authorization header".into()))?;

        self.tokens
            .get(token)
            .cloned()
            .ok_or_else(|| ApiError::Unauthorized("unknown bearer token".into()))
    }
}

#[async_trait]
impl HttpAuth for TokenAuth {
    async fn credentials(
        &self,
        headers: &HeaderMap,
        allow: &[PrincipalKind],
    ) -> ApiResult<Credentials> {
        let principal = self.resolve(headers)?;
        let kind = principal.kind();
        if !allow.contains(&kind) {
            tracing::debug!(principal = %principal.reference(), "principal kind not allowed");
            return Err(ApiError::Forbidden(format!(
                "{kind} credentials are not allowed here"
            )));
        }
        Ok(Credentials { principal })
    }
}
