use crate::{
    api_error::ApiError, app_state::SharedState, json_body::JsonBody, login_request::LoginRequest,
    login_response::LoginResponse, settings::Settings, user::User, user_get_response::UserGetResponse,
    user_register_request::UserRegisterRequest, user_role::UserRole,
};
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: u64,
    pub email: String,
    pub role: UserRole,
    pub exp: usize,
    pub iat: usize,
}

pub fn create_token(user: &User, settings: &Settings) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let expiry = now + Duration::minutes(settings.jwt_expiration_in_minutes as i64);

    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        role: user.role,
        exp: expiry.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings.jwt_secret.as_bytes()),
    )
}

pub fn verify_token(token: &str, settings: &Settings) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(settings.jwt_secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Admin passes every check.
pub fn require_role(user: &User, required: UserRole) -> Result<(), ApiError> {
    if user.role.satisfies(required) {
        Ok(())
    } else {
        warn!("{} ({:?}) denied, {:?} required", user.email, user.role, required);
        Err(ApiError::Forbidden(format!("{:?} role required", required)))
    }
}

fn validate_registration(payload: &UserRegisterRequest) -> Result<(), ApiError> {
    let required = [
        ("firstName", &payload.first_name),
        ("lastName", &payload.last_name),
        ("email", &payload.email),
        ("password", &payload.password),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(ApiError::BadRequest(format!("{field} is required")));
    }
    if !payload.email.contains('@') {
        return Err(ApiError::BadRequest("email is not valid".to_string()));
    }
    if payload.password != payload.confirm_password {
        return Err(ApiError::BadRequest("Passwords do not match".to_string()));
    }
    if payload.role == UserRole::Admin {
        return Err(ApiError::Forbidden("Admin accounts cannot self-register".to_string()));
    }
    Ok(())
}

pub fn register(
    State(state): State<SharedState>,
    JsonBody(payload): JsonBody<UserRegisterRequest>,
) -> Result<(StatusCode, Json<UserGetResponse>), ApiError> {
    validate_registration(&payload)?;

    let uow = state.data_context.begin()?;
    if uow.users().get_by_email(&payload.email)?.is_some() {
        return Err(ApiError::Conflict(format!("{} is already registered", payload.email.trim())));
    }

    let password_hash = hash_password(&payload.password).map_err(|e| ApiError::Internal(e.to_string()))?;
    let mut user = User::new(payload, password_hash);
    uow.users().add(&mut user)?;
    uow.save()?;

    info!("Registered {} as {:?}", user.email, user.role);
    Ok((StatusCode::CREATED, Json(user.to_get_dto())))
}

pub fn login(
    State(state): State<SharedState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state
        .data_context
        .read()?
        .users()
        .get_by_email(&payload.email)?
        .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    if !verify_password(&payload.password, &user.password_hash) {
        warn!("Failed login for {}", user.email);
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    }

    let token = create_token(&user, &state.settings).map_err(|e| ApiError::Internal(e.to_string()))?;

    info!("{} has logged in", user.email);
    Ok(Json(LoginResponse {
        token,
        user: user.to_get_dto(),
    }))
}

/// Resolves the bearer token to a stored [`User`] and puts it in the request extensions.
pub async fn auth_middleware(
    State(state): State<SharedState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::Unauthorized("Missing or invalid token".to_string()))?;

    let claims = verify_token(token, &state.settings).map_err(|e| {
        warn!("Rejected token: {}", e);
        ApiError::Unauthorized("Invalid token".to_string())
    })?;

    let user = {
        let uow = state.data_context.read()?;
        let user = uow.users().get(claims.sub)?;
        user
    }
    .ok_or_else(|| ApiError::Unauthorized("User not found".to_string()))?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
