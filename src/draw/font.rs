//! Font descriptor for text rendering.

/// Font configuration for text rendering.
///
/// The family is a CSS-style comma-separated fallback list
/// (e.g. `'Screen Mono', 'Lucida Console', monospace`) and the size is an
/// absolute pixel size.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family list, most preferred first
    pub family: String,

    /// Font size in surface pixels
    pub size: f64,
}

impl FontDescriptor {
    /// Creates a new font descriptor with the specified parameters.
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    /// Family names with surrounding whitespace and quotes stripped.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.family
            .split(',')
            .map(|name| name.trim().trim_matches(|c: char| c == '\'' || c == '"'))
            .filter(|name| !name.is_empty())
    }

    /// Converts this font descriptor to a Pango font description string.
    ///
    /// Format: "Family1,Family2 SIZEpx"
    /// Example: "Screen Mono,monospace 5px"
    pub fn to_pango_string(&self) -> String {
        let families: Vec<&str> = self.families().collect();
        format!("{} {}px", families.join(","), self.size)
    }

    /// Converts this font descriptor to a CSS font shorthand (`5px Family`).
    pub fn to_css_string(&self) -> String {
        format!("{}px {}", self.size, self.family)
    }
}
