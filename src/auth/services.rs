use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, warn};

use crate::{
    auth::{
        dto::{LoginRequest, SignupRequest},
        jwt::JwtKeys,
        password,
    },
    error::{ApiError, AppResult},
    users::{NewUser, User, UserStore},
};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_PASSWORD_LEN: usize = 128;
pub const MAX_NAME_LEN: usize = 100;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

lazy_static! {
    /// Verified against when the email is unknown, so both login failures cost one Argon2 run.
    static ref DUMMY_HASH: String =
        password::hash_password("userauth-dummy-password").unwrap_or_default();
}

pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Signup input after validation. `password` is still plaintext.
#[derive(Debug)]
pub struct ValidSignup {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub fn validate_signup(req: SignupRequest) -> AppResult<ValidSignup> {
    let name = req.name.trim().to_string();
    let email = normalize_email(&req.email);

    if name.is_empty() || email.is_empty() || req.password.trim().is_empty() {
        return Err(ApiError::validation("All fields are required"));
    }
    if !is_valid_email(&email) {
        return Err(ApiError::validation("Invalid email"));
    }

    let password_len = req.password.chars().count();
    if password_len < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if password_len > MAX_PASSWORD_LEN {
        return Err(ApiError::validation(format!(
            "Password must be at most {MAX_PASSWORD_LEN} characters"
        )));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ApiError::validation(format!(
            "Name must be at most {MAX_NAME_LEN} characters"
        )));
    }

    Ok(ValidSignup {
        name,
        email,
        password: req.password,
    })
}

/// Validates, hashes and stores a new user, then issues a token for it.
pub async fn signup(
    users: &dyn UserStore,
    keys: &JwtKeys,
    req: SignupRequest,
) -> AppResult<(User, String)> {
    let valid = validate_signup(req)?;

    let password_hash = password::hash_password_async(valid.password).await?;

    let user = users
        .insert(NewUser {
            name: valid.name,
            email: valid.email,
            password_hash,
        })
        .await
        .map_err(|e| {
            warn!(error = %e, "signup insert failed");
            ApiError::from(e)
        })?;

    let token = keys.sign(user.id, &user.email)?;
    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((user, token))
}

/// Checks credentials and issues a token. Unknown email and wrong password
/// are indistinguishable to the caller.
pub async fn login(
    users: &dyn UserStore,
    keys: &JwtKeys,
    req: LoginRequest,
) -> AppResult<(User, String)> {
    let email = normalize_email(&req.email);
    if email.is_empty() || req.password.is_empty() {
        return Err(ApiError::validation("Email and password required"));
    }

    let user = match users.find_by_email(&email).await? {
        Some(u) => u,
        None => {
            warn!(email = %email, "login unknown email");
            let _ = password::verify_password_async(req.password, DUMMY_HASH.clone()).await;
            return Err(ApiError::InvalidCredentials);
        }
    };

    let ok = password::verify_password_async(req.password, user.password_hash.clone()).await?;
    if !ok {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let token = keys.sign(user.id, &user.email)?;
    info!(user_id = %user.id, "user logged in");
    Ok((user, token))
}
