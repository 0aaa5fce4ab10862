//! Per-session token that every form post must echo back.

use actix_session::Session;
use rand::Rng;

use crate::errors::AppError;

const SESSION_KEY: &str = "csrf_token";

/// Name of the hidden input carrying the token.
pub const FORM_FIELD: &str = "csrf_token";

/// The session's token, issued on first use.
pub fn session_token(session: &Session) -> String {
    if let Ok(Some(token)) = session.get::<String>(SESSION_KEY) {
        return token;
    }
    let token = new_token();
    if let Err(e) = session.insert(SESSION_KEY, &token) {
        log::warn!("Could not store CSRF token in session: {e}");
    }
    token
}

/// Reject a post whose token is missing or differs from the session's.
pub fn verify(session: &Session, submitted: Option<&str>) -> Result<(), AppError> {
    let stored = session.get::<String>(SESSION_KEY).ok().flatten();
    match (stored, submitted) {
        (Some(stored), Some(submitted)) if tokens_match(&stored, submitted) => Ok(()),
        _ => {
            log::warn!("Rejected form post with a missing or stale CSRF token");
            Err(AppError::Csrf)
        }
    }
}

fn new_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    hex::encode(bytes)
}

// Compares every byte regardless of where the first difference is.
fn tokens_match(a: &str, b: &str) -> bool {
    a.len() == b.len() && a.bytes().zip(b.bytes()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
