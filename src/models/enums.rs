use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Extra `| "alias"` literals are accepted by both `FromStr` and serde
/// deserialization but never produced.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal $(| $alias:literal)*),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($(#[serde(alias = $alias)])* $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s $(| $alias)* => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(ChatRole {
    User => "user",
    Assistant => "assistant" | "ai",
});

str_enum!(ConfidenceBand {
    High => "high",
    Moderate => "moderate",
    Low => "low",
});

impl ConfidenceBand {
    /// Band thresholds used by the analysis badge: 80+ high, 50+ moderate.
    pub fn from_confidence(confidence: u8) -> Self {
        if confidence >= 80 {
            Self::High
        } else if confidence >= 50 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn chat_role_round_trip() {
        for (variant, s) in [(ChatRole::User, "user"), (ChatRole::Assistant, "assistant")] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(ChatRole::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn chat_role_accepts_legacy_ai_spelling() {
        assert_eq!(ChatRole::from_str("ai").unwrap(), ChatRole::Assistant);
        assert_eq!(ChatRole::Assistant.as_str(), "assistant");
    }

    #[test]
    fn unknown_role_is_invalid_enum() {
        let err = ChatRole::from_str("doctor").unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidEnum {
                field: "ChatRole".into(),
                value: "doctor".into(),
            }
        );
    }

    #[test]
    fn roles_serialize_snake_case() {
        assert_eq!(serde_json::to_string(&ChatRole::Assistant).unwrap(), "\"assistant\"");
        assert_eq!(serde_json::to_string(&ConfidenceBand::Moderate).unwrap(), "\"moderate\"");
    }

    #[test]
    fn chat_role_deserializes_legacy_ai_spelling() {
        let role: ChatRole = serde_json::from_str("\"ai\"").unwrap();
        assert_eq!(role, ChatRole::Assistant);
        let role: ChatRole = serde_json::from_str("\"assistant\"").unwrap();
        assert_eq!(role, ChatRole::Assistant);
    }

    #[test]
    fn legacy_transcript_entry_deserializes() {
        let json = r#"{"id":1,"role":"ai","content":"Hello!","sent_at":"2026-01-01T09:00:00"}"#;
        let message: crate::models::ChatMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.role, ChatRole::Assistant);
    }

    #[test]
    fn confidence_band_thresholds() {
        assert_eq!(ConfidenceBand::from_confidence(100), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_confidence(80), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_confidence(79), ConfidenceBand::Moderate);
        assert_eq!(ConfidenceBand::from_confidence(50), ConfidenceBand::Moderate);
        assert_eq!(ConfidenceBand::from_confidence(49), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::from_confidence(0), ConfidenceBand::Low);
    }
}
