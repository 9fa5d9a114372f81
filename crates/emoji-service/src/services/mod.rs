//! Business logic services

pub mod activity;
pub mod auth;
pub mod context;
pub mod emoji;
pub mod error;
pub mod user;

pub use activity::ActivityService;
pub use auth::{AuthService, AuthenticatedUser};
pub use context::{EmojiSettings, ServiceContext, ServiceContextBuilder};
pub use emoji::{EmojiService, Resolution};
pub use error::{ServiceError, ServiceResult};
pub use user::UserService;
