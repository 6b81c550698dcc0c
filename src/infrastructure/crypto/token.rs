//! Session token generation

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of generated session tokens.
pub const SESSION_TOKEN_LEN: usize = 32;

/// Generate an opaque session token of ASCII letters and digits.
///
/// `thread_rng` is cryptographically secure, so the token is usable as a
/// bearer credential. Collisions are not checked.
pub fn generate_session_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_TOKEN_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_shape() {
        let token = generate_session_token();
        assert_eq!(token.len(), SESSION_TOKEN_LEN);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_tokens_differ() {
        assert_ne!(generate_session_token(), generate_session_token());
    }
}
