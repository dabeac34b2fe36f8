//! In-process stores for tests and the `memory://` database mode.

pub mod post;
pub mod user;

pub use post::MemoryPostRepository;
pub use user::MemoryUserRepository;
