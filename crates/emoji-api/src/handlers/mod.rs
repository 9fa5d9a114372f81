//! Route handlers

pub mod auth;
pub mod emoji;
pub mod health;
pub mod users;
