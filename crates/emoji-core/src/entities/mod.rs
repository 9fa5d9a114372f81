//! Domain entities - core business objects

mod activity;
mod emoji;
mod role;
mod session;
mod user;

pub use activity::{ActivityEntry, EmojiQuery};
pub use emoji::{validate_emoji, EmojiMeaning, MeaningSource, MAX_EMOJI_BYTES};
pub use role::{Role, RoleParseError};
pub use session::Session;
pub use user::User;
