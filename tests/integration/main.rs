//! End-to-end tests driving the full router over in-memory stores.

mod account_test;
mod auth_test;
mod helpers;
mod post_test;
mod session_test;
