//! Window width classification, matching the Tailwind screen sizes.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Breakpoint {
    #[serde(rename = "xs")]
    Xs,
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl Breakpoint {
    /// Lower bounds in CSS pixels, smallest first.
    pub const MIN_WIDTHS: [(Breakpoint, f64); 5] = [
        (Breakpoint::Sm, 640.0),
        (Breakpoint::Md, 768.0),
        (Breakpoint::Lg, 1024.0),
        (Breakpoint::Xl, 1280.0),
        (Breakpoint::Xxl, 1536.0),
    ];

    pub fn from_width(width: f64) -> Self {
        Self::MIN_WIDTHS
            .iter()
            .rev()
            .find(|(_, min)| width >= *min)
            .map(|(breakpoint, _)| *breakpoint)
            .unwrap_or(Breakpoint::Xs)
    }

    pub fn is_mobile(&self) -> bool {
        *self == Breakpoint::Xs
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
