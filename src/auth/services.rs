pub(crate) use crate::auth::dto::{Claims, JwtKeys};
use crate::auth::dto::{AuthResponse, LoginRequest, RegisterRequest};
use crate::auth::password::{hash_password, verify_password};
use crate::auth::repo_types::{NewUser, User};
use crate::config::{JwtConfig, MAX_TTL_MINUTES};
use crate::db::StoreError;
use crate::error::AppError;
use crate::state::AppState;
use crate::zodiac::{self, ZodiacSign};
use axum::extract::FromRef;
use jsonwebtoken::{decode, encode, errors::ErrorKind, Header, Validation};
use jsonwebtoken::{DecodingKey, EncodingKey};
use lazy_static::lazy_static;
use regex::Regex;
use std::time::Duration;
use time::{Date, Duration as TimeDuration, OffsetDateTime};
use tracing::{debug, info, warn};
use uuid::Uuid;

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 50;
const PASSWORD_MIN: usize = 6;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        JwtKeys::from(&state.config.jwt)
    }
}

impl From<&JwtConfig> for JwtKeys {
    fn from(cfg: &JwtConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(cfg.secret.as_bytes()),
            decoding: DecodingKey::from_secret(cfg.secret.as_bytes()),
            issuer: cfg.issuer.clone(),
            audience: cfg.audience.clone(),
            ttl: Duration::from_secs(cfg.ttl_minutes.clamp(0, MAX_TTL_MINUTES) as u64 * 60),
        }
    }
}

impl JwtKeys {
    pub fn sign(&self, user_id: Uuid) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(self.ttl.as_secs() as i64);
        let claims = Claims {
            sub: user_id,
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id = %user_id, "jwt signed");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> jsonwebtoken::errors::Result<Claims> {
        let mut validation = Validation::default();
        validation.set_audience(std::slice::from_ref(&self.audience));
        validation.set_issuer(std::slice::from_ref(&self.issuer));
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        debug!(user_id = %data.claims.sub, "jwt verified");
        Ok(data.claims)
    }
}

/// Registration input after trimming and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub birthdate: Date,
}

/// Check every registration field and report all failures at once.
pub fn validate_registration(req: RegisterRequest, today: Date) -> Result<Registration, AppError> {
    let mut errors = Vec::new();

    let name = req.name.unwrap_or_default().trim().to_string();
    let name_len = name.chars().count();
    if name_len < NAME_MIN || name_len > NAME_MAX {
        errors.push(format!("Name must be between {NAME_MIN} and {NAME_MAX} characters"));
    }

    let email = req.email.unwrap_or_default().trim().to_lowercase();
    if !is_valid_email(&email) {
        errors.push("Please provide a valid email".to_string());
    }

    let password = req.password.unwrap_or_default();
    if password.chars().count() < PASSWORD_MIN {
        errors.push(format!("Password must be at least {PASSWORD_MIN} characters long"));
    }

    let birthdate = match req.birthdate.as_deref().map(zodiac::parse_date) {
        Some(Ok(date)) if date > today => {
            errors.push("Birthdate cannot be in the future".to_string());
            None
        }
        Some(Ok(date)) => Some(date),
        _ => {
            errors.push("Please provide a valid birthdate (YYYY-MM-DD)".to_string());
            None
        }
    };

    match birthdate {
        Some(birthdate) if errors.is_empty() => Ok(Registration {
            name,
            email,
            password,
            birthdate,
        }),
        _ => Err(AppError::invalid_fields(errors)),
    }
}

pub async fn register(
    state: &AppState,
    req: RegisterRequest,
    today: Date,
) -> Result<AuthResponse, AppError> {
    let form = validate_registration(req, today)?;

    if state.users.find_by_email(&form.email).await?.is_some() {
        warn!(email = %form.email, "email already registered");
        return Err(duplicate_email());
    }

    let zodiac_sign = ZodiacSign::from_birthdate(form.birthdate);
    let password_hash = hash_password(&form.password)
        .map_err(|e| AppError::internal("Internal server error during registration", e))?;

    let user = match state
        .users
        .create(NewUser {
            name: form.name,
            email: form.email,
            password_hash,
            birthdate: form.birthdate,
            zodiac_sign,
        })
        .await
    {
        Ok(user) => user,
        Err(StoreError::Conflict(_)) => {
            // lost a race with a concurrent registration
            return Err(duplicate_email());
        }
        Err(e) => return Err(AppError::internal("Internal server error during registration", e)),
    };

    let token = JwtKeys::from_ref(state)
        .sign(user.id)
        .map_err(|e| AppError::internal("Internal server error during registration", e))?;

    info!(user_id = %user.id, zodiac_sign = %user.zodiac_sign, "user registered");
    Ok(AuthResponse {
        user: user.into(),
        token,
    })
}

pub async fn login(state: &AppState, req: LoginRequest) -> Result<AuthResponse, AppError> {
    let email = req.email.unwrap_or_default().trim().to_lowercase();
    let password = req.password.unwrap_or_default();

    let mut errors = Vec::new();
    if !is_valid_email(&email) {
        errors.push("Please provide a valid email".to_string());
    }
    if password.is_empty() {
        errors.push("Password is required".to_string());
    }
    if !errors.is_empty() {
        return Err(AppError::invalid_fields(errors));
    }

    let user = match state.users.find_by_email(&email).await? {
        Some(user) => user,
        None => {
            warn!(email = %email, "login unknown email");
            return Err(invalid_credentials());
        }
    };

    let ok = verify_password(&password, &user.password_hash)
        .map_err(|e| AppError::internal("Internal server error during login", e))?;
    if !ok {
        warn!(user_id = %user.id, "login invalid password");
        return Err(invalid_credentials());
    }

    let token = JwtKeys::from_ref(state)
        .sign(user.id)
        .map_err(|e| AppError::internal("Internal server error during login", e))?;

    info!(user_id = %user.id, "user logged in");
    Ok(AuthResponse {
        user: user.into(),
        token,
    })
}

/// Resolve a bearer token to the user that owns it.
pub async fn authenticate(state: &AppState, token: &str) -> Result<User, AppError> {
    let claims = JwtKeys::from_ref(state).verify(token).map_err(|e| {
        warn!(error = %e, "token rejected");
        match e.kind() {
            ErrorKind::ExpiredSignature => AppError::unauthorized("Token expired"),
            _ => AppError::unauthorized("Invalid token"),
        }
    })?;

    state
        .users
        .find_by_id(claims.sub)
        .await?
        .ok_or_else(|| {
            warn!(user_id = %claims.sub, "token for missing user");
            AppError::unauthorized("Invalid token - user not found")
        })
}

fn duplicate_email() -> AppError {
    AppError::Duplicate("User with this email already exists".into())
}

// Same message for unknown email and wrong password.
fn invalid_credentials() -> AppError {
    AppError::unauthorized("Invalid email or password")
}
