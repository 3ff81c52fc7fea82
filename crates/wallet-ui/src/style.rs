//! Inline style maps.

use std::fmt;

/// Ordered CSS declarations, rendered as an inline `style` attribute or
/// applied property by property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<(String, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `property`, replacing an earlier value in place.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let property = property.into();
        let value = value.into();
        match self.declarations.iter_mut().find(|(name, _)| *name == property) {
            Some((_, existing)) => *existing = value,
            None => self.declarations.push((property, value)),
        }
        self
    }

    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Later declarations of `other` win.
    pub fn merge(mut self, other: &Style) -> Self {
        for (property, value) in other.iter() {
            self.set(property, value);
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (property, value)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{property}: {value};")?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Style::new();
        for (property, value) in iter {
            style.set(property, value);
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_inline() {
        let style = Style::new()
            .with("background-color", "#5E409D")
            .with("color", "#FFFCF0");
        assert_eq!(style.to_string(), "background-color: #5E409D; color: #FFFCF0;");
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut style: Style = [("opacity", "1"), ("transform", "none")].into_iter().collect();
        style.set("opacity", "0.5");
        assert_eq!(style.to_string(), "opacity: 0.5; transform: none;");
        assert_eq!(style.get("opacity"), Some("0.5"));
    }

    #[test]
    fn test_merge_prefers_other() {
        let base = Style::new().with("color", "red").with("margin", "0");
        let merged = base.merge(&Style::new().with("color", "blue"));
        assert_eq!(merged.get("color"), Some("blue"));
        assert_eq!(merged.get("margin"), Some("0"));
    }

    #[test]
    fn test_empty_style() {
        assert!(Style::new().is_empty());
        assert_eq!(Style::new().to_string(), "");
    }
}
