//! Raw prompt assembly.
//!
//! Maps form data to the deterministic "raw" prompt by ordered clause
//! concatenation. Field values are interpolated verbatim and optional
//! clauses are omitted when their field is the empty string.

use std::fmt::Write;

use crate::options::DEFAULT_CAMERA;
use crate::types::{ImagePromptData, PromptData, TextPromptData};

/// Build the raw prompt for `data`.
///
/// The prompt kind travels with the data, so the template rule is selected
/// by the variant.
pub fn build_prompt(data: &PromptData) -> String {
    match data {
        PromptData::Text(text) => build_text_prompt(text),
        PromptData::Image(image) => build_image_prompt(image),
    }
}

// ---------------------------------------------------------------------------
// Text rule
// ---------------------------------------------------------------------------

/// Each clause is followed by a single space; the result is trimmed.
pub fn build_text_prompt(data: &TextPromptData) -> String {
    let mut prompt = String::new();

    // Writing into a String cannot fail.
    let _ = write!(prompt, "Actúa como un {}. ", data.producer_role);
    let _ = write!(
        prompt,
        "El objetivo es crear un {} sobre \"{}\". ",
        data.format, data.objective
    );
    let _ = write!(prompt, "El texto va dirigido a {}. ", data.audience);
    let _ = write!(prompt, "El tono debe ser {}. ", data.tone);
    let _ = write!(prompt, "El contexto es: {}. ", data.context);
    if !data.length.is_empty() {
        let _ = write!(prompt, "La extensión aproximada es de {}. ", data.length);
    }
    if !data.depth.is_empty() {
        let _ = write!(prompt, "El nivel de profundidad debe ser {}. ", data.depth);
    }
    if !data.constraints.is_empty() {
        let _ = write!(prompt, "Restricciones: {}. ", data.constraints);
    }
    if !data.example.is_empty() {
        let _ = write!(
            prompt,
            "Usa un estilo similar a este ejemplo: \"{}\".",
            data.example
        );
    }

    prompt.trim().to_string()
}

// ---------------------------------------------------------------------------
// Image rule
// ---------------------------------------------------------------------------

/// Comma-joined description, then period-separated style, camera, detail,
/// aspect ratio and negative prompt clauses.
pub fn build_image_prompt(data: &ImagePromptData) -> String {
    let mut prompt = data.subject.clone();

    if !data.action.is_empty() {
        let _ = write!(prompt, ", {}", data.action);
    }
    if !data.context.is_empty() {
        let _ = write!(prompt, ", {}", data.context);
    }
    if !data.environment.is_empty() {
        let _ = write!(prompt, ", en {}", data.environment);
    }
    if !data.lighting.is_empty() {
        let _ = write!(prompt, ", con iluminación {}", data.lighting);
    }
    let _ = write!(prompt, ". El estilo visual es {}", data.style);
    if !data.camera.is_empty() && data.camera != DEFAULT_CAMERA {
        let _ = write!(prompt, ", usando una cámara {}", data.camera);
    }
    let _ = write!(prompt, ". El nivel de detalle es {}", data.detail_level);
    let _ = write!(prompt, ". La relación de aspecto es {}", data.aspect_ratio);
    if !data.negative_prompt.is_empty() {
        let _ = write!(prompt, ". Prompt negativo: {}", data.negative_prompt);
    }

    prompt.trim().to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
