// content.rs - Message bank lookup
//
// The texts themselves come from the host as JSON:
//   { "joy": { "gentle": [..], "understanding": [..], "deep": [..] }, .. }
// Lookup never fails. Misses fall back to the default emotion, then to the
// gentle tier, then to a fixed message.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{GardenError, Result};
use crate::scene::{Emotion, Rgba};
use crate::sim::Rng;

/// Emotion used when the bank has no entry for the current one
const DEFAULT_EMOTION: &str = "sadness";

const DEEP_COLOR: Rgba = Rgba::rgb(0x8E, 0x44, 0xAD);
const FALLBACK_COLOR: Rgba = Rgba::rgb(0x9C, 0x27, 0xB0);
const FALLBACK_TEXT: &str = "당신의 감정을 이해하고 함께하겠습니다";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Gentle,
    Understanding,
    Deep,
}

impl Tier {
    pub fn from_resonance(resonance: f64) -> Self {
        if resonance < 0.4 {
            Tier::Gentle
        } else if resonance < 0.7 {
            Tier::Understanding
        } else {
            Tier::Deep
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TierTexts {
    pub gentle: Vec<String>,
    pub understanding: Vec<String>,
    pub deep: Vec<String>,
}

impl TierTexts {
    fn get(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::Gentle => &self.gentle,
            Tier::Understanding => &self.understanding,
            Tier::Deep => &self.deep,
        }
    }
}

/// A message chosen for a discovered spot
#[derive(Debug, Clone, PartialEq)]
pub struct MessageChoice {
    pub text: String,
    pub color: Rgba,
    pub tier: Tier,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct MessageBank {
    emotions: HashMap<String, TierTexts>,
}

impl MessageBank {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(GardenError::InvalidMessageBank)
    }

    pub fn is_empty(&self) -> bool {
        self.emotions.is_empty()
    }

    /// Pick a text for `emotion` at the tier selected by `resonance`
    pub fn choose(&self, emotion: Emotion, resonance: f64, rng: &mut Rng) -> MessageChoice {
        let tier = Tier::from_resonance(resonance);
        let color = match tier {
            Tier::Deep => DEEP_COLOR,
            _ => emotion.color(),
        };

        let texts = match self.emotions.get(emotion.key()) {
            Some(texts) => Some(texts),
            None => {
                log::debug!("no messages for '{}', using '{DEFAULT_EMOTION}'", emotion.key());
                self.emotions.get(DEFAULT_EMOTION)
            }
        };

        let list = texts.map(|t| {
            let list = t.get(tier);
            if list.is_empty() {
                log::debug!("no {tier:?} messages for '{}', using gentle", emotion.key());
                t.get(Tier::Gentle)
            } else {
                list
            }
        });

        match list.and_then(|l| rng.pick(l)) {
            Some(text) => MessageChoice { text: text.clone(), color, tier },
            None => {
                log::debug!("message bank miss for '{}', using fallback", emotion.key());
                MessageChoice {
                    text: FALLBACK_TEXT.to_string(),
                    color: FALLBACK_COLOR,
                    tier: Tier::Gentle,
                }
            }
        }
    }
}
