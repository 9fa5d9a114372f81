//! Database models - SQLx-compatible structs for PostgreSQL tables

mod activity;
mod emoji;
mod user;

pub use activity::ActivityRowModel;
pub use emoji::EmojiMeaningModel;
pub use user::UserModel;
