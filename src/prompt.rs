//! Prompt composition from structured room design fields.
//!
//! [`compose_prompt`] is pure: it never fails, never reorders clauses, and
//! produces byte-identical output for identical input.

use serde::{Deserialize, Serialize};

/// Built-in style presets: short identifier to descriptive clause.
pub const STYLE_PRESETS: &[(&str, &str)] = &[
    ("Scandinavian", "Scandinavian, clean lines, natural light, light oak wood, soft neutrals"),
    ("Minimalist", "Minimalist, uncluttered, functional, neutral palette, simple geometric forms"),
    ("Industrial", "Industrial, exposed brick, concrete, metal accents, darker palette, loft vibe"),
    ("Japandi", "Japandi, warm minimalism, natural materials, low furniture, earthy tones"),
    ("Boho", "Bohemian, eclectic textiles, plants, layered textures, warm inviting colors"),
    ("Sali", "No windows, futuristic lights, modern furniture"),
];

/// Constraints appended to every prompt.
pub const NEGATIVE_CLAUSE: &str = "No people, no text, no logos, no watermarks, no deformed \
                                   geometry, physically plausible lighting and materials.";

/// Quality emphasis appended after [`NEGATIVE_CLAUSE`].
pub const QUALITY_CLAUSE: &str = "High detail, realistic furniture layout, natural proportions, \
                                  interior design render quality.";

/// Structured description of the room to render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDesign {
    /// Preset key (e.g. `"Scandinavian"`) or a free-text style description.
    pub style: String,
    /// Kind of room, e.g. `"bedroom"`.
    pub room_type: String,
    /// Furnishings to include.
    pub elements: String,
    /// Surface materials.
    pub materials: String,
    /// Color scheme.
    pub palette: String,
    /// Lighting description.
    pub lighting: String,
    /// Camera and framing.
    pub camera: String,
    /// Optional free-form addition; ignored when blank.
    #[serde(default)]
    pub extra: String,
}

/// Look up the descriptive clause for a style.
///
/// Unknown styles are returned unchanged so that free-text styles still
/// produce a usable prompt.
#[must_use]
pub fn style_description(style: &str) -> &str {
    STYLE_PRESETS
        .iter()
        .find(|&&(key, _)| key == style)
        .map_or(style, |&(_, description)| description)
}

/// Compose the full natural-language prompt for a room design.
#[must_use]
pub fn compose_prompt(design: &RoomDesign) -> String {
    let mut parts = vec![
        format!("Photorealistic {} interior visualization.", design.room_type),
        format!("Style: {}.", style_description(&design.style)),
        format!("Key elements: {}.", design.elements),
        format!("Materials: {}.", design.materials),
        format!("Color palette: {}.", design.palette),
        format!("Lighting: {}.", design.lighting),
        format!("Camera/framing: {}.", design.camera),
    ];

    let extra = design.extra.trim();
    if !extra.is_empty() {
        parts.push(format!("Extras: {extra}."));
    }

    parts.push(NEGATIVE_CLAUSE.to_string());
    parts.push(QUALITY_CLAUSE.to_string());
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bedroom(style: &str, extra: &str) -> RoomDesign {
        RoomDesign {
            style: style.into(),
            room_type: "bedroom".into(),
            elements: "bed, nightstand, reading lamp".into(),
            materials: "light oak wood".into(),
            palette: "soft neutrals".into(),
            lighting: "soft ambient, warm temperature, window light".into(),
            camera: "35mm lens, eye-level, centered composition".into(),
            extra: extra.into(),
        }
    }

    #[test]
    fn scandinavian_bedroom_exact() {
        let expected = "Photorealistic bedroom interior visualization. \
            Style: Scandinavian, clean lines, natural light, light oak wood, soft neutrals. \
            Key elements: bed, nightstand, reading lamp. \
            Materials: light oak wood. \
            Color palette: soft neutrals. \
            Lighting: soft ambient, warm temperature, window light. \
            Camera/framing: 35mm lens, eye-level, centered composition. \
            No people, no text, no logos, no watermarks, no deformed geometry, \
            physically plausible lighting and materials. \
            High detail, realistic furniture layout, natural proportions, \
            interior design render quality.";
        assert_eq!(compose_prompt(&bedroom("Scandinavian", "")), expected);
    }

    #[test]
    fn deterministic() {
        let design = bedroom("Japandi", "bay window, bookshelves");
        assert_eq!(compose_prompt(&design), compose_prompt(&design.clone()));
    }

    #[test]
    fn unknown_style_used_verbatim() {
        let prompt = compose_prompt(&bedroom("NotAPreset", ""));
        assert!(prompt.contains("Style: NotAPreset."));
    }

    #[test]
    fn known_style_substituted() {
        let prompt = compose_prompt(&bedroom("Minimalist", ""));
        assert!(prompt.contains(
            "Style: Minimalist, uncluttered, functional, neutral palette, simple geometric forms."
        ));
        assert!(!prompt.contains("Style: Minimalist."));
    }

    #[test]
    fn style_lookup_is_case_sensitive() {
        assert_eq!(style_description("boho"), "boho");
        assert!(style_description("Boho").starts_with("Bohemian"));
    }

    #[test]
    fn blank_extra_omitted() {
        for extra in ["", "   ", "\n\t "] {
            let prompt = compose_prompt(&bedroom("Boho", extra));
            assert!(!prompt.contains("Extras:"), "extra {extra:?} should be omitted");
        }
    }

    #[test]
    fn extra_trimmed_and_placed_before_fixed_clauses() {
        let prompt = compose_prompt(&bedroom("Boho", "  plants by the window \n"));
        let extras = prompt.find("Extras: plants by the window.").unwrap();
        let camera = prompt.find("Camera/framing:").unwrap();
        let negative = prompt.find(NEGATIVE_CLAUSE).unwrap();
        assert!(camera < extras && extras < negative);
    }

    #[test]
    fn clause_order_fixed() {
        let prompt = compose_prompt(&bedroom("Industrial", "loft stairs"));
        let markers = [
            "Photorealistic ",
            "Style: ",
            "Key elements: ",
            "Materials: ",
            "Color palette: ",
            "Lighting: ",
            "Camera/framing: ",
            "Extras: ",
            NEGATIVE_CLAUSE,
            QUALITY_CLAUSE,
        ];
        let positions: Vec<usize> = markers.iter().map(|m| prompt.find(m).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "positions: {positions:?}");
        assert!(prompt.ends_with(QUALITY_CLAUSE));
        assert!(prompt.starts_with("Photorealistic bedroom"));
    }

    #[test]
    fn fields_are_not_escaped_or_truncated() {
        let long = "velvet ".repeat(200);
        let mut design = bedroom("Sali", "");
        design.materials.clone_from(&long);
        let prompt = compose_prompt(&design);
        assert!(prompt.contains(&format!("Materials: {long}.")));
        assert!(prompt.contains("Style: No windows, futuristic lights, modern furniture."));
    }

    #[test]
    fn every_preset_resolves() {
        for &(key, description) in STYLE_PRESETS {
            assert_eq!(style_description(key), description);
        }
    }
}
