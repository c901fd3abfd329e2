//! # Quesito (Developer Q&A platform API)
//!
//! `quesito` is the HTTP service behind the developer Q&A platform. It exposes
//! question listing/creation and user registration/login over a JSON REST API
//! backed by PostgreSQL.
//!
//! ## Questions
//!
//! Questions carry a title, a body, an ordered list of tags, and counters for
//! votes, answers, and views. Listing returns the 20 newest questions joined
//! with their author's public identity. Submissions without an author are
//! attributed to a fixed `anonymous` placeholder user so every question keeps
//! a resolvable author reference.
//!
//! ## Authentication
//!
//! Registration stores a bcrypt hash of the password, never the password
//! itself, and both registration and login issue a signed JWT with a 7-day
//! validity window. A missing user and a wrong password are reported with the
//! same `Invalid credentials` error so callers cannot probe which factor
//! failed.
//!
//! ## Responses
//!
//! Every error response uses the uniform `{"success": false, "error": "..."}`
//! envelope; successful responses carry an explicit `success` flag next to
//! their payload.

pub mod api;
pub mod cli;
pub mod client;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        // Should be a hex string (full SHA-1 is 40 chars, but could be short)
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
