//! Subjects: the radicals, kanji and vocabulary taught by WaniKani.

use crate::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type SubjectId = u64;

/// A single subject.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subject {
    #[serde(deserialize_with = "null_as_default")]
    pub id: SubjectId,
    /// The kind of subject, called `object` by the API.
    #[serde(deserialize_with = "null_as_default")]
    pub object: SubjectKind,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    pub data_updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub data: SubjectData,
}

impl Subject {
    pub fn kind(&self) -> &SubjectKind {
        &self.object
    }

    pub fn is_hidden(&self) -> bool {
        self.data.hidden_at.is_some()
    }

    /// The meaning marked as primary, if any.
    pub fn primary_meaning(&self) -> Option<&str> {
        self.data
            .meanings
            .iter()
            .find(|m| m.primary)
            .map(|m| m.meaning.as_str())
    }

    /// The reading marked as primary, if any. Radicals have no readings.
    pub fn primary_reading(&self) -> Option<&str> {
        self.data
            .readings
            .iter()
            .find(|r| r.primary)
            .map(|r| r.reading.as_str())
    }

    /// Meanings accepted as answers, including whitelisted auxiliary meanings.
    pub fn accepted_meanings(&self) -> impl Iterator<Item = &str> {
        let meanings = self
            .data
            .meanings
            .iter()
            .filter(|m| m.accepted_answer)
            .map(|m| m.meaning.as_str());
        let auxiliary = self
            .data
            .auxiliary_meanings
            .iter()
            .filter(|m| m.kind == AuxiliaryMeaningKind::Whitelist)
            .map(|m| m.meaning.as_str());
        meanings.chain(auxiliary)
    }

    /// The subject's characters, or its slug for image-only radicals.
    pub fn display_text(&self) -> &str {
        if !self.data.characters.is_empty() {
            &self.data.characters
        } else if !self.data.character.is_empty() {
            &self.data.character
        } else {
            &self.data.slug
        }
    }
}

/// The kind of a subject. Kinds this crate does not know about keep their name
/// so that they are written back out unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubjectKind {
    Radical,
    Kanji,
    Vocabulary,
    KanaVocabulary,
    Unknown(String),
}

impl SubjectKind {
    /// The name used for the kind in the API.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Radical => "radical",
            Self::Kanji => "kanji",
            Self::Vocabulary => "vocabulary",
            Self::KanaVocabulary => "kana_vocabulary",
            Self::Unknown(name) => name,
        }
    }

    /// Parses the name of a known kind.
    pub fn from_name(name: &str) -> Option<Self> {
        match Self::from(name.to_string()) {
            Self::Unknown(_) => None,
            kind => Some(kind),
        }
    }
}

impl Default for SubjectKind {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl From<String> for SubjectKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "radical" => Self::Radical,
            "kanji" => Self::Kanji,
            "vocabulary" => Self::Vocabulary,
            "kana_vocabulary" => Self::KanaVocabulary,
            _ => Self::Unknown(name),
        }
    }
}

impl From<SubjectKind> for String {
    fn from(kind: SubjectKind) -> Self {
        match kind {
            SubjectKind::Unknown(name) => name,
            kind => kind.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubjectData {
    #[serde(deserialize_with = "null_as_default")]
    pub spaced_repetition_system_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub level: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    pub created_at: Option<DateTime<Utc>>,
    pub hidden_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub document_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub character: String,
    #[serde(deserialize_with = "null_as_default")]
    pub characters: String,
    #[serde(deserialize_with = "null_as_default")]
    pub character_images: Vec<CharacterImage>,
    #[serde(deserialize_with = "null_as_default")]
    pub meanings: Vec<Meaning>,
    #[serde(deserialize_with = "null_as_default")]
    pub auxiliary_meanings: Vec<AuxiliaryMeaning>,
    #[serde(deserialize_with = "null_as_default")]
    pub readings: Vec<Reading>,
    /// Subjects this one is built from, e.g. the radicals of a kanji.
    #[serde(deserialize_with = "null_as_default")]
    pub component_subject_ids: Vec<SubjectId>,
    /// Subjects that use this one as a component.
    #[serde(deserialize_with = "null_as_default")]
    pub amalgamation_subject_ids: Vec<SubjectId>,
    #[serde(deserialize_with = "null_as_default")]
    pub visually_similar_subject_ids: Vec<SubjectId>,
    #[serde(deserialize_with = "null_as_default")]
    pub parts_of_speech: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub meaning_mnemonic: String,
    #[serde(deserialize_with = "null_as_default")]
    pub meaning_hint: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reading_mnemonic: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reading_hint: String,
    #[serde(deserialize_with = "null_as_default")]
    pub context_sentences: Vec<ContextSentence>,
    #[serde(deserialize_with = "null_as_default")]
    pub pronunciation_audios: Vec<PronunciationAudio>,
    #[serde(deserialize_with = "null_as_default")]
    pub lesson_position: u32,
}

/// An image of a radical that has no unicode character.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterImage {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: CharacterImageMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterImageMetadata {
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dimensions: String,
    #[serde(deserialize_with = "null_as_default")]
    pub style_name: String,
    /// Only set for SVG images.
    #[serde(deserialize_with = "null_as_default")]
    pub inline_styles: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meaning {
    #[serde(deserialize_with = "null_as_default")]
    pub meaning: String,
    #[serde(deserialize_with = "null_as_default")]
    pub primary: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub accepted_answer: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuxiliaryMeaning {
    #[serde(deserialize_with = "null_as_default")]
    pub meaning: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: AuxiliaryMeaningKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuxiliaryMeaningKind {
    /// Accepted as a correct answer.
    Whitelist,
    /// Rejected, usually with a hint that it's a meaning of a similar subject.
    Blacklist,
    Unknown(String),
}

impl Default for AuxiliaryMeaningKind {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl From<String> for AuxiliaryMeaningKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "whitelist" => Self::Whitelist,
            "blacklist" => Self::Blacklist,
            _ => Self::Unknown(name),
        }
    }
}

impl From<AuxiliaryMeaningKind> for String {
    fn from(kind: AuxiliaryMeaningKind) -> Self {
        match kind {
            AuxiliaryMeaningKind::Whitelist => "whitelist".to_string(),
            AuxiliaryMeaningKind::Blacklist => "blacklist".to_string(),
            AuxiliaryMeaningKind::Unknown(name) => name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reading {
    /// `onyomi`, `kunyomi` or `nanori` for kanji, empty for vocabulary.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reading: String,
    #[serde(deserialize_with = "null_as_default")]
    pub primary: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub accepted_answer: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextSentence {
    #[serde(deserialize_with = "null_as_default")]
    pub en: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ja: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PronunciationAudio {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: PronunciationAudioMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PronunciationAudioMetadata {
    #[serde(deserialize_with = "null_as_default")]
    pub gender: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub pronunciation: String,
    #[serde(deserialize_with = "null_as_default")]
    pub voice_actor_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub voice_actor_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub voice_description: String,
}
