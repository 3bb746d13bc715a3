//! User API Handlers
//!
//! Registration, credential login and current-user lookup.

use axum::{Extension, Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::auth::{self, CurrentUser, PrincipalResolver};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::{AppError, AppResult};
use shared::client::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};
use shared::models::{Customer, CustomerCreate};

/// POST /api/user/register - create the account and its customer profile
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    payload.validate()?;

    let password_hash = auth::password::hash(&payload.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {}", e)))?;

    let store = state.get_store();
    let user = store.users().create(
        &payload.email,
        &password_hash,
        &payload.username,
        &payload.mobile_number,
        payload.role,
    )?;

    let customer = store.customers().create(CustomerCreate {
        customer_name: payload.customer_name,
        information: payload.information,
        user_id: user.id,
    })?;

    tracing::info!(
        user_id = %user.id,
        email = %user.email,
        role = %user.role.as_str(),
        "User registered"
    );

    Ok((StatusCode::CREATED, Json(customer)))
}

/// POST /api/user/login - verify credentials and issue a token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let resolver = PrincipalResolver::new(state.store.users());
    let principal = resolver.resolve(&req.email).map_err(|_| {
        security_log!("WARN", "login_unknown_identity", identity = req.email.clone());
        AppError::not_found(format!("User with email {} not found", req.email))
    })?;

    let password_valid = auth::password::verify(&req.password, &principal.password_hash)
        .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

    if !password_valid {
        security_log!("WARN", "login_bad_password", identity = req.email.clone());
        return Err(AppError::InvalidCredentials);
    }

    let token = state
        .get_jwt_service()
        .issue(&principal.identity, principal.role)?;

    tracing::info!(
        user_id = %principal.user_id,
        email = %principal.identity,
        role = %principal.role.as_str(),
        "User logged in successfully"
    );

    Ok(Json(LoginResponse {
        user_id: principal.user_id,
        email: principal.identity,
        role: principal.role,
        token,
    }))
}

/// GET /api/user/me - current authenticated user's information
pub async fn me(Extension(user): Extension<CurrentUser>) -> AppResult<Json<UserInfo>> {
    Ok(Json(UserInfo {
        id: user.id,
        email: user.identity,
        role: user.role,
        authorities: user.authorities,
    }))
}
