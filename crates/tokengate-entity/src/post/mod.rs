//! Post domain entities.

pub mod model;

pub use model::{NewPost, Post, PostUpdate};
