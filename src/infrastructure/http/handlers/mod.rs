//! HTTP Handlers

mod fallback;
mod health;
mod user;

pub use fallback::*;
pub use health::*;
pub use user::*;
