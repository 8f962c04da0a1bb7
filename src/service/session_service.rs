use cookie::time::Duration;
use cookie::{Cookie, SameSite};

/// Name of the cookie that carries the session token
pub const SESSION_COOKIE: &str = "token";

pub struct SessionService;

impl SessionService {
    /// Serializes the session cookie. The max-age is derived from the
    /// token's own lifetime so cookie and token expire together.
    pub fn create_session_cookie(token: &str, max_age_seconds: i64, secure: bool) -> String {
        Cookie::build((SESSION_COOKIE, token))
            .http_only(true)
            .secure(secure)
            .same_site(SameSite::Strict)
            .path("/")
            .max_age(Duration::seconds(max_age_seconds))
            .build()
            .to_string()
    }

    /// Overwrites the cookie with an immediately-expiring empty value
    pub fn destroy_session_cookie(secure: bool) -> String {
        Cookie::build((SESSION_COOKIE, ""))
            .http_only(true)
            .secure(secure)
            .same_site(SameSite::Strict)
            .path("/")
            .max_age(Duration::seconds(-1))
            .build()
            .to_string()
    }

    /// Reads the session token from a `Cookie` request header
    pub fn token_from_cookie_header(header: &str) -> Option<String> {
        Cookie::split_parse(header.to_string())
            .filter_map(|cookie| cookie.ok())
            .find(|cookie| cookie.name() == SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_flags() {
        let cookie = SessionService::create_session_cookie("abc123", 86400, false);
        assert!(cookie.starts_with("token=abc123"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_secure_flag_in_production() {
        let cookie = SessionService::create_session_cookie("abc123", 86400, true);
        assert!(cookie.contains("Secure"));
    }

    #[test]
    fn test_destroy_cookie_expires_immediately() {
        let cookie = SessionService::destroy_session_cookie(false);
        assert!(cookie.starts_with("token="));
        assert!(cookie.contains("Max-Age=-1"));
    }

    #[test]
    fn test_token_from_cookie_header() {
        let header = "otra=valor; token=eyJhbGciOi; tercera=x";
        assert_eq!(
            SessionService::token_from_cookie_header(header).as_deref(),
            Some("eyJhbGciOi")
        );
        assert_eq!(SessionService::token_from_cookie_header("otra=valor"), None);
    }
}
