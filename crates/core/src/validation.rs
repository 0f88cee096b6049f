//! Form validation.
//!
//! Required-field rules live on the data types as `validator` derives; this
//! module turns their failures into the user-facing messages shown by the
//! form. Validation happens before anything reaches the network.

use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::types::PromptData;

pub const TEXT_REQUIRED_MESSAGE: &str = "Por favor, completa los campos 'Define el rol de la IA', \
     'Objetivo', 'Proporciona contexto', 'Especifica la audiencia', 'Tono' y 'Formato'.";

pub const IMAGE_REQUIRED_MESSAGE: &str =
    "Por favor, completa los campos 'Sujeto principal' y 'Estilo visual'.";

pub const PASTED_PROMPT_REQUIRED_MESSAGE: &str = "Por favor, pega o escribe un prompt.";

pub const INSTRUCTION_REQUIRED_MESSAGE: &str =
    "Por favor, escribe una instrucción para refinar el prompt.";

/// Field rule: the value must contain something other than whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Check that every required field of the form is filled in.
pub fn validate_prompt_data(data: &PromptData) -> Result<(), CoreError> {
    let (result, message) = match data {
        PromptData::Text(text) => (text.validate(), TEXT_REQUIRED_MESSAGE),
        PromptData::Image(image) => (image.validate(), IMAGE_REQUIRED_MESSAGE),
    };
    result.map_err(|_| CoreError::Validation(message.to_string()))
}

/// Whether stored data is a complete form (as opposed to the partial data
/// reconstructed from a pasted prompt).
pub fn is_complete(data: &PromptData) -> bool {
    validate_prompt_data(data).is_ok()
}

pub fn validate_pasted_prompt(prompt: &str) -> Result<(), CoreError> {
    not_blank(prompt)
        .map_err(|_| CoreError::Validation(PASTED_PROMPT_REQUIRED_MESSAGE.to_string()))
}

pub fn validate_instruction(instruction: &str) -> Result<(), CoreError> {
    not_blank(instruction)
        .map_err(|_| CoreError::Validation(INSTRUCTION_REQUIRED_MESSAGE.to_string()))
}
