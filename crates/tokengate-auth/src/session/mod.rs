//! Session lifecycle: issuance, per-request authentication, and revocation.

pub mod authenticator;
pub mod issuer;
pub mod revoker;
pub mod store;

pub use authenticator::{AuthenticatedUser, RequestAuthenticator, bearer_token};
pub use issuer::{IssuedToken, TokenIssuer};
pub use revoker::SessionRevoker;
pub use store::{SessionStore, token_fingerprint};
