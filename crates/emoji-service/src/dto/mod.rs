//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers from domain types to response DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{ActivityParams, LoginRequest, RegisterRequest, UpdateUserRequest};

pub use responses::{
    ActivityItem, ActivityResponse, HealthChecks, HealthResponse, InterpretEmojiResponse,
    LoginResponse, MessageResponse, ReadinessResponse, RegisterResponse, UpdateUserResponse,
    UserDetails,
};
