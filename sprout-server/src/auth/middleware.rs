//! Authentication middleware
//!
//! Two layers run on every request, in order:
//!
//! 1. [`authenticate`] - extracts and validates the bearer token and
//!    installs a [`CurrentUser`] into the request extensions. Fail-open
//!    on classification: any decode or resolution failure degrades to
//!    the unauthenticated state, it never turns into a response error
//!    here.
//! 2. [`enforce_policy`] - evaluates the authorization rule table
//!    against the (possibly absent) context and produces 401/403.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtService, PrincipalResolver};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::AppError;

/// Per-request authentication filter.
///
/// State machine: NoToken -> TokenExtracted -> IdentityKnown ->
/// Authenticated; any failed transition leaves the request
/// unauthenticated and passes it along for the policy layer to judge.
pub async fn authenticate(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Response {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match header.and_then(JwtService::extract_from_header) {
        Some(token) => token,
        // No bearer credential presented; stay anonymous
        None => return next.run(req).await,
    };

    let jwt_service = state.get_jwt_service();
    let subject = match jwt_service.decode_subject(token) {
        Ok(subject) => subject,
        Err(e) => {
            security_log!(
                "WARN",
                "token_rejected",
                error = format!("{}", e),
                uri = format!("{}", req.uri())
            );
            return next.run(req).await;
        }
    };

    if req.extensions().get::<CurrentUser>().is_none() {
        let resolver = PrincipalResolver::new(state.store.users());
        match resolver.resolve(&subject) {
            Ok(principal) if jwt_service.is_valid(token, &principal.identity) => {
                // Authorities come from the stored role, not the
                // token's embedded role claim.
                req.extensions_mut().insert(CurrentUser::from(principal));
            }
            Ok(_) => {
                security_log!(
                    "WARN",
                    "token_invalid_for_principal",
                    identity = subject.clone(),
                    uri = format!("{}", req.uri())
                );
            }
            Err(e) => {
                security_log!(
                    "WARN",
                    "principal_unresolved",
                    error = format!("{}", e),
                    uri = format!("{}", req.uri())
                );
            }
        }
    }

    next.run(req).await
}

/// Authorization gate, evaluated after [`authenticate`]
pub async fn enforce_policy(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // CORS preflight is never role-gated
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let user = req.extensions().get::<CurrentUser>();
    state
        .policy
        .check(req.method(), req.uri().path(), user)
        .inspect_err(|_| {
            security_log!(
                "WARN",
                "access_denied",
                method = format!("{}", req.method()),
                path = req.uri().path().to_string(),
                identity = user.map(|u| u.identity.clone()).unwrap_or_default()
            );
        })?;

    Ok(next.run(req).await)
}

/// Extension methods for reading the authenticated context
pub trait CurrentUserExt {
    /// The authenticated context, or `Unauthorized` if absent
    fn current_user(&self) -> Result<&CurrentUser, AppError>;
}

impl CurrentUserExt for Request {
    fn current_user(&self) -> Result<&CurrentUser, AppError> {
        self.extensions()
            .get::<CurrentUser>()
            .ok_or(AppError::Unauthorized)
    }
}
