//! Width token resolution.
//!
//! A width token is either a positive pixel count or a named preset. Height
//! is never computed here; the encoder's aspect-preserving scale derives it.

use crate::errors::{GifError, Result};

/// Recommended widths for common use cases.
pub const WIDTH_PRESETS: &[(&str, u32)] = &[
    ("tiny", 240),
    ("small", 320),
    ("medium", 480),
    ("large", 640),
    ("xlarge", 800),
    ("hd", 1280),
];

pub const DEFAULT_PRESET: &str = "medium";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedWidth {
    Preset { name: &'static str, pixels: u32 },
    Custom { pixels: u32 },
}

impl ResolvedWidth {
    pub fn pixels(&self) -> u32 {
        match self {
            ResolvedWidth::Preset { pixels, .. } => *pixels,
            ResolvedWidth::Custom { pixels } => *pixels,
        }
    }
}

/// Case-insensitive preset lookup.
pub fn preset_width(name: &str) -> Option<(&'static str, u32)> {
    WIDTH_PRESETS
        .iter()
        .find(|(preset, _)| preset.eq_ignore_ascii_case(name))
        .copied()
}

/// Resolve a width token to pixels. No token defaults to the medium preset;
/// preset names win over numeric interpretation.
pub fn resolve_width(token: Option<&str>) -> Result<ResolvedWidth> {
    let token = match token {
        Some(token) => token,
        None => DEFAULT_PRESET,
    };

    if let Some((name, pixels)) = preset_width(token) {
        return Ok(ResolvedWidth::Preset { name, pixels });
    }

    match token.parse::<u32>() {
        Ok(pixels) if pixels > 0 => Ok(ResolvedWidth::Custom { pixels }),
        _ => Err(GifError::InvalidWidth(token.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_case_insensitive() {
        for token in ["medium", "Medium", "MEDIUM"] {
            let resolved = resolve_width(Some(token)).unwrap();
            assert_eq!(resolved.pixels(), 480, "token {:?}", token);
            assert!(matches!(resolved, ResolvedWidth::Preset { name: "medium", .. }));
        }
    }

    #[test]
    fn test_all_presets() {
        let cases: &[(&str, u32)] = &[
            ("tiny", 240),
            ("small", 320),
            ("medium", 480),
            ("large", 640),
            ("xlarge", 800),
            ("hd", 1280),
        ];
        for (name, pixels) in cases {
            assert_eq!(resolve_width(Some(name)).unwrap().pixels(), *pixels);
        }
    }

    #[test]
    fn test_numeric_width() {
        let resolved = resolve_width(Some("600")).unwrap();
        assert_eq!(resolved, ResolvedWidth::Custom { pixels: 600 });
    }

    #[test]
    fn test_default_is_medium() {
        let resolved = resolve_width(None).unwrap();
        assert_eq!(
            resolved,
            ResolvedWidth::Preset {
                name: "medium",
                pixels: 480
            }
        );
    }

    #[test]
    fn test_invalid_tokens() {
        for token in ["huge", "0", "-480", "12.5"] {
            let err = resolve_width(Some(token)).unwrap_err();
            assert!(
                matches!(err, GifError::InvalidWidth(_)),
                "token {:?} gave {:?}",
                token,
                err
            );
        }
    }
}
