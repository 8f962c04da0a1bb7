pub mod auth;
pub mod authorization;
pub mod rate_limit;
