use emoji_core::entities::EmojiMeaning;

use crate::models::EmojiMeaningModel;

impl From<EmojiMeaningModel> for EmojiMeaning {
    fn from(model: EmojiMeaningModel) -> Self {
        EmojiMeaning {
            emoji_char: model.emoji_char,
            meaning: model.meaning,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
