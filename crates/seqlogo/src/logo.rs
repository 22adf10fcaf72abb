pub type Color = String;

/// One letter in a logo column. `height` is in bits.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub base: char,
    pub height: f64,
    pub color: Color,
}

/// One motif position: glyphs stacked bottom to top in the given order.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub glyphs: Vec<Glyph>,
}

impl Column {
    /// Total stack height in bits.
    pub fn height(&self) -> f64 {
        self.glyphs.iter().map(|g| g.height).sum()
    }
}

/// A complete sequence logo.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoPlot {
    pub title: String,
    pub columns: Vec<Column>,
    /// Y-axis range in bits (2 for DNA).
    pub max_bits: f64,
}
