//! Ports implemented by the infrastructure crates

mod provider;
mod repositories;

pub use provider::MeaningProvider;
pub use repositories::{
    ActivityQuery, ActivityRepository, EmojiRepository, RepoResult, SessionRepository,
    UserRepository,
};
