//! Authentication Middleware
//! Mission: Protect API endpoints with bearer token validation

use crate::auth::{models::AuthError, service::AuthService};
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use serde_json::json;
use std::sync::Arc;

/// Validates `Authorization: Bearer <token>` and inserts the caller's
/// [`Identity`](crate::auth::models::Identity) into request extensions.
pub async fn auth_middleware(
    State(auth): State<Arc<AuthService>>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let TypedHeader(Authorization(bearer)) = bearer.ok_or(AuthError::InvalidToken)?;

    let identity = auth.authorize(bearer.token())?;
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AuthError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid username or password")
            }
            AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token"),
            AuthError::Forbidden(reason) => (StatusCode::FORBIDDEN, *reason),
            AuthError::Internal(err) => {
                tracing::error!("Auth backend error: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({ "detail": message }));
        if status == StatusCode::UNAUTHORIZED {
            (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_responses() {
        let invalid_creds = AuthError::InvalidCredentials.into_response();
        assert_eq!(invalid_creds.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(invalid_creds.headers()[header::WWW_AUTHENTICATE], "Bearer");

        let invalid_token = AuthError::InvalidToken.into_response();
        assert_eq!(invalid_token.status(), StatusCode::UNAUTHORIZED);

        let forbidden = AuthError::Forbidden("Only admins can add employees").into_response();
        assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);
        assert!(forbidden.headers().get(header::WWW_AUTHENTICATE).is_none());

        let internal = AuthError::Internal(anyhow::anyhow!("bcrypt exploded")).into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
