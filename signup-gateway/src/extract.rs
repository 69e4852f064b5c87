//! Request extractors whose rejections are reported as [`GatewayError`].
//!
//! axum's own `Path` and `Query` rejections answer with a `text/plain` body;
//! these wrappers route them through the `{"detail": ...}` error body instead.

use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use signup_core::Email;

use crate::error::GatewayError;

/// The percent-decoded `{activity_name}` path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityName(pub String);

impl<S> FromRequestParts<S> for ActivityName
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(name) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(Self(name))
    }
}

/// The percent-decoded `email` query parameter.
///
/// When the parameter repeats, the last value wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailParam(pub Email);

impl EmailParam {
    /// Pick the last `email` value out of decoded query pairs.
    ///
    /// # Errors
    /// Returns [`GatewayError::InvalidRequest`] if no `email` pair is present.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, GatewayError> {
        pairs
            .into_iter()
            .rev()
            .find(|(key, _)| key == "email")
            .map(|(_, value)| Self(Email::from(value)))
            .ok_or_else(|| GatewayError::InvalidRequest("missing query parameter 'email'".to_owned()))
    }
}

impl<S> FromRequestParts<S> for EmailParam
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state).await?;
        Self::from_pairs(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
    }

    #[test]
    fn email_param_takes_last_repeated_value() {
        let param = EmailParam::from_pairs(pairs(&[("email", "a@x.com"), ("email", "b@x.com")]));
        assert!(
            matches!(param, Ok(EmailParam(ref email)) if email.as_str() == "b@x.com"),
            "last email must win, got {param:?}"
        );
    }

    #[test]
    fn email_param_ignores_other_keys() {
        let param = EmailParam::from_pairs(pairs(&[("email", "a@x.com"), ("utm", "x")]));
        assert!(matches!(param, Ok(EmailParam(ref email)) if email.as_str() == "a@x.com"));
    }

    #[test]
    fn email_param_missing_is_invalid_request() {
        let param = EmailParam::from_pairs(pairs(&[("mail", "a@x.com")]));
        assert!(matches!(param, Err(GatewayError::InvalidRequest(_))));
    }

    #[test]
    fn email_param_accepts_empty_value() {
        let param = EmailParam::from_pairs(pairs(&[("email", "")]));
        assert!(matches!(param, Ok(EmailParam(ref email)) if email.as_str().is_empty()));
    }
}
