//! Fixed instruction templates sent to Gemini.

use serde_json::{json, Value};

/// System instruction for improving a raw prompt.
pub const IMPROVE_SYSTEM_INSTRUCTION: &str = r#"Eres un experto en "prompt engineering" para modelos de IA generativa. Tu tarea es mejorar el siguiente prompt de usuario para que sea más efectivo, claro y detallado.
Analiza el prompt del usuario y genera una versión principal mejorada.
Si se solicita, genera también tres versiones alternativas, cada una con un enfoque específico y claro:
1.  **Máxima Fidelidad (claridad)**: Una versión que traduce la idea del usuario de la forma más literal y directa posible, eliminando ambigüedades para obtener un resultado predecible y fiel a la visión original.
2.  **Interpretación Artística (creatividad)**: Una versión que le da a la IA más libertad creativa, sugiriendo elementos imaginativos o inesperados para un resultado más sorprendente y artístico.
3.  **Enfoque Técnico (precision)**: Una versión que se centra en los detalles técnicos de la composición, como el tipo de cámara, la iluminación específica o la estructura de la imagen/texto, para usuarios que buscan un control granular.

Devuelve la respuesta en formato JSON."#;

/// System instruction for applying a refinement instruction.
pub const REFINE_SYSTEM_INSTRUCTION: &str = r#"Eres un asistente experto en "prompt engineering". Tu tarea es modificar un prompt existente basándote en una instrucción específica del usuario. Aplica la instrucción de la forma más fiel y efectiva posible. Devuelve únicamente el prompt modificado, sin explicaciones adicionales."#;

/// User turn for an improvement request.
pub fn improve_user_prompt(raw_prompt: &str, want_alternatives: bool) -> String {
    let alternatives = if want_alternatives {
        "Además, genera las 3 versiones alternativas (claridad, creatividad, precisión)."
    } else {
        "No generes versiones alternativas."
    };
    format!("Mejora el siguiente prompt: \"{raw_prompt}\".\n{alternatives}")
}

/// User turn for a refinement request.
pub fn refine_user_prompt(prompt: &str, instruction: &str) -> String {
    format!(
        "Aquí está el prompt que quiero refinar:\n\n\"{prompt}\"\n\n\
         Esta es la instrucción para refinarlo:\n\n\"{instruction}\""
    )
}

/// Response schema for an improvement request.
///
/// `mainPrompt` is always required; the `alternatives` object, with all
/// three keys required, is only declared when alternatives were requested.
pub fn improve_response_schema(want_alternatives: bool) -> Value {
    let mut properties = json!({
        "mainPrompt": {
            "type": "STRING",
            "description": "La versión principal y mejorada del prompt."
        }
    });

    if want_alternatives {
        properties["alternatives"] = json!({
            "type": "OBJECT",
            "properties": {
                "claridad": {
                    "type": "STRING",
                    "description": "Versión para \"Máxima Fidelidad (Literal)\"."
                },
                "creatividad": {
                    "type": "STRING",
                    "description": "Versión para \"Interpretación Artística (Creativo)\"."
                },
                "precision": {
                    "type": "STRING",
                    "description": "Versión para \"Enfoque Técnico (Detallado)\"."
                }
            },
            "required": ["claridad", "creatividad", "precision"]
        });
    }

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": ["mainPrompt"]
    })
}
