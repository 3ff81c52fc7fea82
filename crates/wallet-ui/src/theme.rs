//! Color theme for the wallet components.
//!
//! A [`ThemeConfig`] names five color slots, each either a literal CSS color
//! or a `{ color, shade }` reference into the built-in [`PALETTE`]. Resolving
//! the config produces an immutable [`Theme`] of plain color strings.

use serde::{Deserialize, Serialize};

use crate::errors::ThemeError;

/// A named family of shades, e.g. `purple` with `DEFAULT` and `light`.
pub struct ColorFamily {
    pub name: &'static str,
    pub shades: &'static [(&'static str, &'static str)],
}

pub const DEFAULT_SHADE: &str = "DEFAULT";

pub const PALETTE: &[ColorFamily] = &[
    ColorFamily {
        name: "base",
        shades: &[
            ("black", "#100F0F"),
            ("950", "#1C1B1A"),
            ("900", "#282726"),
            ("850", "#343331"),
            ("800", "#403E3C"),
            ("700", "#575653"),
            ("600", "#6F6E69"),
            ("500", "#878580"),
            ("300", "#B7B5AC"),
            ("200", "#CECDC3"),
            ("150", "#DAD8CE"),
            ("100", "#E6E4D9"),
            ("50", "#F2F0E5"),
            ("paper", "#FFFCF0"),
        ],
    },
    ColorFamily {
        name: "red",
        shades: &[("DEFAULT", "#AF3029"), ("light", "#D14D41")],
    },
    ColorFamily {
        name: "orange",
        shades: &[("DEFAULT", "#BC5215"), ("light", "#DA702C")],
    },
    ColorFamily {
        name: "yellow",
        shades: &[("DEFAULT", "#AD8301"), ("light", "#D0A215")],
    },
    ColorFamily {
        name: "green",
        shades: &[("DEFAULT", "#66800B"), ("light", "#879A39")],
    },
    ColorFamily {
        name: "cyan",
        shades: &[("DEFAULT", "#24837B"), ("light", "#3AA99F")],
    },
    ColorFamily {
        name: "blue",
        shades: &[("DEFAULT", "#205EA6"), ("light", "#4385BE")],
    },
    ColorFamily {
        name: "purple",
        shades: &[("DEFAULT", "#5E409D"), ("light", "#8B7EC8")],
    },
    ColorFamily {
        name: "magenta",
        shades: &[("DEFAULT", "#A02F6F"), ("light", "#CE5D97")],
    },
];

/// Looks up `color.shade` in the built-in palette.
pub fn palette_color(color: &str, shade: &str) -> Result<&'static str, ThemeError> {
    let family = PALETTE
        .iter()
        .find(|family| family.name == color)
        .ok_or_else(|| ThemeError::UnknownColor(color.to_string()))?;

    family
        .shades
        .iter()
        .find(|(name, _)| *name == shade)
        .map(|(_, value)| *value)
        .ok_or_else(|| ThemeError::UnknownShade {
            color: color.to_string(),
            shade: shade.to_string(),
        })
}

/// One configured slot: a raw CSS color or a palette reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeColor {
    Literal(String),
    Palette {
        color: String,
        #[serde(default = "default_shade")]
        shade: String,
    },
}

fn default_shade() -> String {
    DEFAULT_SHADE.to_string()
}

impl ThemeColor {
    pub fn palette(color: impl Into<String>, shade: impl Into<String>) -> Self {
        ThemeColor::Palette {
            color: color.into(),
            shade: shade.into(),
        }
    }

    pub fn resolve(&self) -> Result<String, ThemeError> {
        match self {
            ThemeColor::Literal(value) => Ok(value.clone()),
            ThemeColor::Palette { color, shade } => palette_color(color, shade).map(str::to_string),
        }
    }
}

impl From<&str> for ThemeColor {
    fn from(value: &str) -> Self {
        ThemeColor::Literal(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColorsConfig {
    #[serde(default)]
    pub base: Option<ThemeColor>,
    #[serde(default)]
    pub primary: Option<ThemeColor>,
    #[serde(default)]
    pub secondary: Option<ThemeColor>,
    #[serde(default)]
    pub accent: Option<ThemeColor>,
    #[serde(default)]
    pub backdrop: Option<ThemeColor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub colors: ThemeColorsConfig,
}

impl ThemeConfig {
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        serde_json::from_str(json).map_err(|e| ThemeError::InvalidConfig(e.to_string()))
    }
}

/// Resolved colors, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub base: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub backdrop: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: "#FFFCF0".to_string(),
            primary: "#5E409D".to_string(),
            secondary: "#5E409D".to_string(),
            accent: "#5E409D".to_string(),
            backdrop: "#100F0F".to_string(),
        }
    }
}

impl Theme {
    /// Resolves every configured slot; unset slots keep the default colors.
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let mut theme = Theme::default();
        let colors = &config.colors;
        let slots = [
            (&colors.base, &mut theme.base),
            (&colors.primary, &mut theme.primary),
            (&colors.secondary, &mut theme.secondary),
            (&colors.accent, &mut theme.accent),
            (&colors.backdrop, &mut theme.backdrop),
        ];
        for (configured, slot) in slots {
            if let Some(color) = configured {
                *slot = color.resolve()?;
            }
        }
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_lookup() {
        assert_eq!(palette_color("purple", "DEFAULT").unwrap(), "#5E409D");
        assert_eq!(palette_color("base", "paper").unwrap(), "#FFFCF0");
        assert_eq!(
            palette_color("teal", "DEFAULT"),
            Err(ThemeError::UnknownColor("teal".to_string()))
        );
        assert!(matches!(
            palette_color("red", "950"),
            Err(ThemeError::UnknownShade { .. })
        ));
    }

    #[test]
    fn test_from_config_mixes_literals_and_palette() {
        let config = ThemeConfig {
            colors: ThemeColorsConfig {
                primary: Some(ThemeColor::palette("blue", "light")),
                accent: Some("rebeccapurple".into()),
                ..Default::default()
            },
        };

        let theme = Theme::from_config(&config).unwrap();
        assert_eq!(theme.primary, "#4385BE");
        assert_eq!(theme.accent, "rebeccapurple");
        assert_eq!(theme.base, Theme::default().base);
        assert_eq!(theme.backdrop, "#100F0F");
    }

    #[test]
    fn test_from_config_rejects_unknown_shade() {
        let config = ThemeConfig {
            colors: ThemeColorsConfig {
                backdrop: Some(ThemeColor::palette("base", "25")),
                ..Default::default()
            },
        };

        assert!(matches!(
            Theme::from_config(&config),
            Err(ThemeError::UnknownShade { .. })
        ));
    }

    #[test]
    fn test_config_from_json() {
        let config = ThemeConfig::from_json(
            r##"{
                "colors": {
                    "base": { "color": "base", "shade": "950" },
                    "primary": { "color": "magenta" },
                    "backdrop": "#000000"
                }
            }"##,
        )
        .unwrap();

        assert_eq!(config.colors.base, Some(ThemeColor::palette("base", "950")));
        assert_eq!(config.colors.primary, Some(ThemeColor::palette("magenta", "DEFAULT")));
        assert_eq!(config.colors.backdrop, Some(ThemeColor::Literal("#000000".to_string())));
        assert_eq!(config.colors.secondary, None);
    }

    #[test]
    fn test_invalid_json_config() {
        assert!(matches!(
            ThemeConfig::from_json("{ \"colors\": 3 }"),
            Err(ThemeError::InvalidConfig(_))
        ));
    }
}
