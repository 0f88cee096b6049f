//! Form data and prompt artifact types.
//!
//! JSON field names are camelCase so persisted records and relay payloads
//! stay compatible with the browser front-end.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

use crate::error::CoreError;
use crate::options::{DEFAULT_ASPECT_RATIO, DEFAULT_CAMERA, DEFAULT_DETAIL_LEVEL};
use crate::validation::not_blank;

/// History and saved-item ids are millisecond timestamps.
pub type HistoryId = i64;

/// Number of characters of a pasted prompt kept as the partial form title.
pub const PASTED_EXCERPT_CHARS: usize = 50;

/// Which data shape and template rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum PromptKind {
    Text,
    Image,
}

impl PromptKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PromptKind::Text => "text",
            PromptKind::Image => "image",
        }
    }
}

/// One of the five independently refinable prompt artifacts of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum PromptSlot {
    Raw,
    Main,
    Claridad,
    Creatividad,
    Precision,
}

impl PromptSlot {
    pub const ALL: [PromptSlot; 5] = [
        PromptSlot::Raw,
        PromptSlot::Main,
        PromptSlot::Claridad,
        PromptSlot::Creatividad,
        PromptSlot::Precision,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PromptSlot::Raw => "raw",
            PromptSlot::Main => "main",
            PromptSlot::Claridad => "claridad",
            PromptSlot::Creatividad => "creatividad",
            PromptSlot::Precision => "precision",
        }
    }
}

impl std::fmt::Display for PromptSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form fields describing a text generation task.
///
/// Every field is optional on the wire so partial records (a pasted prompt
/// keeps only `objective`) still parse; completeness is a validation
/// concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct TextPromptData {
    #[validate(custom(function = "not_blank"))]
    pub objective: String,
    #[validate(custom(function = "not_blank"))]
    pub producer_role: String,
    #[validate(custom(function = "not_blank"))]
    pub tone: String,
    #[validate(custom(function = "not_blank"))]
    pub format: String,
    #[validate(custom(function = "not_blank"))]
    pub audience: String,
    pub depth: String,
    pub length: String,
    pub constraints: String,
    #[validate(custom(function = "not_blank"))]
    pub context: String,
    pub example: String,
}

/// Form fields describing an image generation task.
///
/// Missing fields take their [`Default`] value: empty text, or the
/// enumerated default for camera, detail level and aspect ratio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct ImagePromptData {
    #[validate(custom(function = "not_blank"))]
    pub subject: String,
    pub action: String,
    pub context: String,
    pub environment: String,
    pub lighting: String,
    #[validate(custom(function = "not_blank"))]
    pub style: String,
    pub camera: String,
    pub detail_level: String,
    pub aspect_ratio: String,
    pub negative_prompt: String,
}

impl Default for ImagePromptData {
    fn default() -> Self {
        Self {
            subject: String::new(),
            action: String::new(),
            context: String::new(),
            environment: String::new(),
            lighting: String::new(),
            style: String::new(),
            camera: DEFAULT_CAMERA.to_string(),
            detail_level: DEFAULT_DETAIL_LEVEL.to_string(),
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
            negative_prompt: String::new(),
        }
    }
}

/// Form data of either kind.
///
/// Serialized untagged: the kind travels next to the data (`promptType`).
/// There is no `Deserialize`; decode with [`PromptData::from_value`] and the
/// accompanying kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum PromptData {
    Text(TextPromptData),
    Image(ImagePromptData),
}

impl PromptData {
    pub fn kind(&self) -> PromptKind {
        match self {
            PromptData::Text(_) => PromptKind::Text,
            PromptData::Image(_) => PromptKind::Image,
        }
    }

    /// Deserialize a JSON object as the data shape selected by `kind`.
    pub fn from_value(kind: PromptKind, value: serde_json::Value) -> Result<Self, CoreError> {
        let parsed = match kind {
            PromptKind::Text => serde_json::from_value(value).map(PromptData::Text),
            PromptKind::Image => serde_json::from_value(value).map(PromptData::Image),
        };
        parsed.map_err(|e| CoreError::Validation(format!("Datos de formulario no válidos: {e}")))
    }

    /// Reconstruct partial form data from a pasted prompt.
    ///
    /// Only the title field (objective or subject) is filled, with the first
    /// [`PASTED_EXCERPT_CHARS`] characters of the prompt.
    pub fn partial(kind: PromptKind, pasted: &str) -> Self {
        let excerpt: String = pasted.chars().take(PASTED_EXCERPT_CHARS).collect();
        match kind {
            PromptKind::Text => PromptData::Text(TextPromptData {
                objective: excerpt,
                ..Default::default()
            }),
            PromptKind::Image => PromptData::Image(ImagePromptData {
                subject: excerpt,
                ..Default::default()
            }),
        }
    }

    /// Default history title: the objective for text, the subject for images.
    pub fn title(&self) -> &str {
        match self {
            PromptData::Text(data) => &data.objective,
            PromptData::Image(data) => &data.subject,
        }
    }
}

impl From<TextPromptData> for PromptData {
    fn from(data: TextPromptData) -> Self {
        PromptData::Text(data)
    }
}

impl From<ImagePromptData> for PromptData {
    fn from(data: ImagePromptData) -> Self {
        PromptData::Image(data)
    }
}

/// The three remote-generated stylistic variants. Always complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AlternativePrompts {
    /// Maximum fidelity: literal, unambiguous rewrite.
    pub claridad: String,
    /// Artistic interpretation: more creative freedom.
    pub creatividad: String,
    /// Technical focus: camera, lighting, structure details.
    pub precision: String,
}

impl AlternativePrompts {
    pub fn get(&self, slot: PromptSlot) -> Option<&str> {
        match slot {
            PromptSlot::Claridad => Some(&self.claridad),
            PromptSlot::Creatividad => Some(&self.creatividad),
            PromptSlot::Precision => Some(&self.precision),
            PromptSlot::Raw | PromptSlot::Main => None,
        }
    }

    /// Replace one variant in place. Returns `false` for non-alternative slots.
    pub fn set(&mut self, slot: PromptSlot, value: String) -> bool {
        match slot {
            PromptSlot::Claridad => self.claridad = value,
            PromptSlot::Creatividad => self.creatividad = value,
            PromptSlot::Precision => self.precision = value,
            PromptSlot::Raw | PromptSlot::Main => return false,
        }
        true
    }
}

/// Result of one successful generation round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ImprovedPrompts {
    pub main_prompt: String,
    pub alternative_prompts: Option<AlternativePrompts>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn image_data_fills_enumerated_defaults() {
        let data: ImagePromptData =
            serde_json::from_value(json!({ "subject": "a fox", "style": "anime" })).unwrap();
        assert_eq!(data.camera, DEFAULT_CAMERA);
        assert_eq!(data.detail_level, DEFAULT_DETAIL_LEVEL);
        assert_eq!(data.aspect_ratio, DEFAULT_ASPECT_RATIO);
        assert!(data.negative_prompt.is_empty());
    }

    #[test]
    fn from_value_uses_requested_kind() {
        let data = PromptData::from_value(PromptKind::Image, json!({ "subject": "s" })).unwrap();
        assert_eq!(data.kind(), PromptKind::Image);
        assert_eq!(data.title(), "s");

        let data = PromptData::from_value(PromptKind::Text, json!({ "subject": "s" })).unwrap();
        assert_eq!(data.kind(), PromptKind::Text);
        assert_eq!(data.title(), "");
    }

    #[test]
    fn partial_records_parse_with_empty_fields() {
        let data = PromptData::from_value(PromptKind::Text, json!({ "objective": "pegado" })).unwrap();
        assert_eq!(data, PromptData::partial(PromptKind::Text, "pegado"));

        let data = PromptData::from_value(PromptKind::Image, json!({ "subject": "pegado" })).unwrap();
        assert_eq!(data, PromptData::partial(PromptKind::Image, "pegado"));
    }

    #[test]
    fn from_value_rejects_wrong_field_types() {
        let err = PromptData::from_value(PromptKind::Text, json!({ "objective": 5 })).unwrap_err();
        assert!(err.to_string().contains("no válidos"));
        assert!(PromptData::from_value(PromptKind::Image, json!("texto")).is_err());
    }

    #[test]
    fn partial_data_keeps_first_fifty_chars() {
        let pasted = "ñ".repeat(80);
        let data = PromptData::partial(PromptKind::Text, &pasted);
        assert_eq!(data.title().chars().count(), PASTED_EXCERPT_CHARS);

        let data = PromptData::partial(PromptKind::Image, "short");
        assert_eq!(data.title(), "short");
        assert_eq!(data.kind(), PromptKind::Image);
    }

    #[test]
    fn slot_serializes_lowercase() {
        assert_eq!(serde_json::to_value(PromptSlot::Creatividad).unwrap(), "creatividad");
        assert_eq!(serde_json::to_value(PromptKind::Image).unwrap(), "image");
    }

    #[test]
    fn alternatives_set_rejects_non_alternative_slots() {
        let mut alts = AlternativePrompts {
            claridad: "a".into(),
            creatividad: "b".into(),
            precision: "c".into(),
        };
        assert!(alts.set(PromptSlot::Precision, "z".into()));
        assert!(!alts.set(PromptSlot::Main, "nope".into()));
        assert_eq!(alts.get(PromptSlot::Precision), Some("z"));
        assert_eq!(alts.get(PromptSlot::Raw), None);
    }
}
