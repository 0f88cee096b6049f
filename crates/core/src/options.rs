//! Enumerated form options offered to the front-end.

use serde::Serialize;

/// Camera value meaning "no specific camera". The template builder never
/// emits a camera clause for it.
pub const DEFAULT_CAMERA: &str = "Ninguna (por defecto)";

pub const DEFAULT_DETAIL_LEVEL: &str = "Medio";

pub const DEFAULT_ASPECT_RATIO: &str = "1:1";

pub const TONES: &[&str] = &[
    "Formal",
    "Inspirador",
    "Académico",
    "Técnico",
    "Narrativo",
    "Conversacional",
    "Humorístico",
];

pub const DEPTH_LEVELS: &[&str] = &["Básico", "Intermedio", "Avanzado"];

pub const ASPECT_RATIOS: &[&str] = &["1:1", "16:9", "9:16", "4:3", "3:4"];

pub const DETAIL_LEVELS: &[&str] = &["Medio", "Alto"];

/// A selectable camera or lens. `value` is what gets interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CameraOption {
    pub value: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

const fn camera(
    value: &'static str,
    name: &'static str,
    description: &'static str,
) -> CameraOption {
    CameraOption {
        value,
        name,
        description,
    }
}

pub const CAMERA_MODELS: &[CameraOption] = &[
    camera(DEFAULT_CAMERA, "Ninguna", "(por defecto)"),
    camera(
        "Canon EOS R5 (Fotografía y video profesional versátil)",
        "Canon EOS R5",
        "(Fotografía y video profesional versátil)",
    ),
    camera(
        "Sony Alpha A7R IV (Alta resolución y detalle extremo)",
        "Sony Alpha A7R IV",
        "(Alta resolución y detalle extremo)",
    ),
    camera(
        "Nikon Z7 II (Precisión en retrato y paisaje)",
        "Nikon Z7 II",
        "(Precisión en retrato y paisaje)",
    ),
    camera(
        "Fujifilm GFX 100S (Fotografía artística y publicitaria)",
        "Fujifilm GFX 100S",
        "(Fotografía artística y publicitaria)",
    ),
    camera(
        "Leica M11 (Fotografía callejera y documental)",
        "Leica M11",
        "(Fotografía callejera y documental)",
    ),
    camera(
        "Hasselblad X2D 100C (Moda y retrato de lujo)",
        "Hasselblad X2D 100C",
        "(Moda y retrato de lujo)",
    ),
    camera(
        "iPhone 15 Pro (Contenido móvil y redes sociales)",
        "iPhone 15 Pro",
        "(Contenido móvil y redes sociales)",
    ),
    camera(
        "Google Pixel 8 Pro (Fotografía creativa con IA)",
        "Google Pixel 8 Pro",
        "(Fotografía creativa con IA)",
    ),
    camera(
        "Cámara de cine ARRI Alexa (Cine profesional)",
        "Cámara de cine ARRI Alexa",
        "(Cine profesional)",
    ),
    camera(
        "Cámara analógica 35mm (Fotografía artística vintage)",
        "Cámara analógica 35mm",
        "(Fotografía artística vintage)",
    ),
    camera(
        "Lente 50mm f/1.4 (Retratos y escenas naturales)",
        "Lente 50mm f/1.4",
        "(Retratos y escenas naturales)",
    ),
    camera(
        "Lente 85mm f/1.2 (Retratos con gran desenfoque)",
        "Lente 85mm f/1.2",
        "(Retratos con gran desenfoque)",
    ),
    camera(
        "Teleobjetivo 70-200mm (Deportes, fauna y retratos lejanos)",
        "Teleobjetivo 70-200mm",
        "(Deportes, fauna y retratos lejanos)",
    ),
];

/// Every option list in one payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOptions {
    pub tones: &'static [&'static str],
    pub depth_levels: &'static [&'static str],
    pub aspect_ratios: &'static [&'static str],
    pub detail_levels: &'static [&'static str],
    pub camera_models: &'static [CameraOption],
}

impl FormOptions {
    pub fn catalogue() -> Self {
        Self {
            tones: TONES,
            depth_levels: DEPTH_LEVELS,
            aspect_ratios: ASPECT_RATIOS,
            detail_levels: DETAIL_LEVELS,
            camera_models: CAMERA_MODELS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_entries_are_the_form_defaults() {
        assert_eq!(CAMERA_MODELS[0].value, DEFAULT_CAMERA);
        assert_eq!(DETAIL_LEVELS[0], DEFAULT_DETAIL_LEVEL);
        assert_eq!(ASPECT_RATIOS[0], DEFAULT_ASPECT_RATIO);
    }

    #[test]
    fn camera_values_are_unique() {
        let mut values: Vec<_> = CAMERA_MODELS.iter().map(|c| c.value).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), CAMERA_MODELS.len());
    }
}
