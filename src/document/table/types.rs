//! Table-related value types

/// Accent fill of header cells
pub const ACCENT_FILL: &str = "2E86AB";

/// Grid column definition
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridColumn {
    /// Width in twips
    pub width: Option<i32>,
}

/// Cell background (w:shd), always a clear pattern with a solid fill
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shading {
    /// RGB hex fill
    pub fill: String,
}

impl Shading {
    pub fn fill(fill: impl Into<String>) -> Self {
        Shading { fill: fill.into() }
    }
}

/// Look applied to every cell of a header row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderStyle {
    pub fill: String,
    pub text_color: String,
    pub bold: bool,
}

impl Default for HeaderStyle {
    /// Bold white text on the accent fill
    fn default() -> Self {
        HeaderStyle {
            fill: ACCENT_FILL.to_string(),
            text_color: "FFFFFF".to_string(),
            bold: true,
        }
    }
}
