//! Cache key builders for all TokenGate store entries.
//!
//! Backend-level prefixes (such as the Redis `key_prefix`) are applied on
//! top of these keys by the provider.

// ── Session keys ───────────────────────────────────────────

/// Store key of the session entry backing `token`.
///
/// The full token string is the key: two tokens never share an entry,
/// even when they belong to the same user.
pub fn session(token: &str) -> String {
    format!("session:{token}")
}
