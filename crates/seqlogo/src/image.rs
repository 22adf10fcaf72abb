use crate::{pdf, png, svg, LogoPlot};
use std::path::Path;

pub fn generate(plot: &LogoPlot, path: &Path) -> Result<(), String> {
    if let Some(extension) = path.extension().and_then(|ext| ext.to_str()) {
        let svg_content = svg::generate_string(plot);
        match FileType::from_extension(extension) {
            Some(FileType::Svg) => svg::render_from_string(&svg_content, path),
            Some(FileType::Png) => png::render_from_string(&svg_content, path),
            Some(FileType::Pdf) => pdf::render_from_string(&svg_content, path),
            None => Err(format!("Unsupported file extension: {extension:?}")),
        }
    } else {
        Err(format!("Failed to get extension from path: {path:?}"))
    }
}

#[derive(Debug, PartialEq)]
enum FileType {
    Svg,
    Png,
    Pdf,
}

impl FileType {
    fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "svg" => Some(FileType::Svg),
            "png" => Some(FileType::Png),
            "pdf" => Some(FileType::Pdf),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logo::{Column, Glyph};

    #[test]
    fn unsupported_extension_err() {
        let plot = LogoPlot {
            title: String::new(),
            columns: vec![Column {
                glyphs: vec![Glyph {
                    base: 'A',
                    height: 1.0,
                    color: "#109648".to_string(),
                }],
            }],
            max_bits: 2.0,
        };
        assert!(generate(&plot, Path::new("logo.bmp")).is_err());
        assert!(generate(&plot, Path::new("logo")).is_err());
    }
}
