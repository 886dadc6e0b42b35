// emotion.rs - Emotion taxonomy
//
// Each emotion fixes the particle color and shape, the emoji burst set and
// the key used to look up messages in the bank.

use super::Rgba;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Anxiety,
    Love,
    Gratitude,
    Loneliness,
    Peace,
    Excitement,
    #[default]
    Neutral,
}

/// Shape drawn for each ambient particle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Heart,
    Star,
    Tear,
    Dot,
}

impl Emotion {
    pub const ALL: [Emotion; 11] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Anxiety,
        Emotion::Love,
        Emotion::Gratitude,
        Emotion::Loneliness,
        Emotion::Peace,
        Emotion::Excitement,
        Emotion::Neutral,
    ];

    /// Unknown keys fall back to `Neutral`
    pub fn from_key(key: &str) -> Self {
        match Self::ALL.iter().find(|e| e.key() == key) {
            Some(&emotion) => emotion,
            None => {
                log::debug!("unknown emotion '{key}', using neutral");
                Emotion::Neutral
            }
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Anxiety => "anxiety",
            Emotion::Love => "love",
            Emotion::Gratitude => "gratitude",
            Emotion::Loneliness => "loneliness",
            Emotion::Peace => "peace",
            Emotion::Excitement => "excitement",
            Emotion::Neutral => "neutral",
        }
    }

    pub fn color(self) -> Rgba {
        match self {
            Emotion::Joy => Rgba::rgb(0xFF, 0xD7, 0x00),
            Emotion::Sadness => Rgba::rgb(0x4A, 0x90, 0xE2),
            Emotion::Anger => Rgba::rgb(0xFF, 0x6B, 0x6B),
            Emotion::Fear => Rgba::rgb(0x9B, 0x59, 0xB6),
            Emotion::Anxiety => Rgba::rgb(0x95, 0xA5, 0xA6),
            Emotion::Love => Rgba::rgb(0xE9, 0x1E, 0x63),
            Emotion::Gratitude => Rgba::rgb(0x27, 0xAE, 0x60),
            Emotion::Loneliness => Rgba::rgb(0x7F, 0x8C, 0x8D),
            Emotion::Peace => Rgba::rgb(0x34, 0x98, 0xDB),
            Emotion::Excitement => Rgba::rgb(0xF3, 0x9C, 0x12),
            Emotion::Neutral => Rgba::rgb(0xBD, 0xC3, 0xC7),
        }
    }

    pub fn shape(self) -> ShapeKind {
        match self {
            Emotion::Love => ShapeKind::Heart,
            Emotion::Sadness => ShapeKind::Tear,
            _ => ShapeKind::Dot,
        }
    }

    pub fn emojis(self) -> &'static [&'static str] {
        match self {
            Emotion::Joy => &["🌻", "🌸", "✨", "💛", "☀️", "🌈"],
            Emotion::Sadness => &["💧", "🌧️", "💙", "🌙", "💜"],
            Emotion::Anger => &["🔥", "⚡", "💥", "🌋"],
            Emotion::Fear => &["🌫️", "👻", "🌪️", "💨"],
            Emotion::Anxiety => &["🌪️", "💭", "😰", "🌊"],
            Emotion::Love => &["💖", "🌹", "💕", "💗", "🥰"],
            Emotion::Gratitude => &["🙏", "✨", "🌟", "💚", "🌺"],
            Emotion::Loneliness => &["🌙", "⭐", "🕯️", "💙", "🌌"],
            Emotion::Peace => &["🕊️", "🌸", "☁️", "🤍", "🌿"],
            Emotion::Excitement => &["🎉", "🎊", "⚡", "🌟", "💥"],
            Emotion::Neutral => &["🌿", "🍃", "💫", "🌱", "✨"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for emotion in Emotion::ALL {
            assert_eq!(Emotion::from_key(emotion.key()), emotion);
            assert!(!emotion.emojis().is_empty());
        }
    }

    #[test]
    fn unknown_key_is_neutral() {
        assert_eq!(Emotion::from_key("ennui"), Emotion::Neutral);
        assert_eq!(Emotion::from_key(""), Emotion::Neutral);
    }

    #[test]
    fn shapes() {
        assert_eq!(Emotion::Love.shape(), ShapeKind::Heart);
        assert_eq!(Emotion::Sadness.shape(), ShapeKind::Tear);
        assert_eq!(Emotion::Peace.shape(), ShapeKind::Dot);
        // sparkles are plain dots; stars are drawn only on request
        assert_eq!(Emotion::Joy.shape(), ShapeKind::Dot);
    }
}
