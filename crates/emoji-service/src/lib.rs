//! # emoji-service
//!
//! Application layer: the emoji resolution flow, account management,
//! activity listing, and the DTOs exchanged with the HTTP surface.

pub mod dto;
pub mod services;

pub use services::{
    ActivityService, AuthService, AuthenticatedUser, EmojiService, EmojiSettings, Resolution,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
