//! # tokengate-auth
//!
//! Token issuance and session validation for TokenGate.
//!
//! A token authenticates a request only while two things hold at once: its
//! signature verifies and it has not expired, and the session store still has
//! a live entry for it. Revocation deletes the entry; the signed token itself
//! is never touched.
//!
//! ## Modules
//!
//! - `jwt`: claims, HS256 signing and clock-aware decoding
//! - `password`: Argon2id hashing and password policy
//! - `session`: session store facade, issuer, authenticator, revoker
//! - `account`: signup, login, logout, profile and credential changes
//! - `error`: the authentication failure taxonomy

pub mod account;
pub mod error;
pub mod jwt;
pub mod password;
pub mod session;

pub use account::{AccountService, Registration};
pub use error::AuthError;
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use session::{
    AuthenticatedUser, IssuedToken, RequestAuthenticator, SessionRevoker, SessionStore,
    TokenIssuer,
};
