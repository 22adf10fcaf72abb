use crate::logo::LogoPlot;
use std::fmt::Write as FmtWrite;
use std::path::Path;

const COLUMN_WIDTH: f64 = 28.0;
const BITS_SCALE: f64 = 55.0; // pixels per bit
const PAD_LEFT: f64 = 40.0;
const PAD_RIGHT: f64 = 12.0;
const PAD_TOP: f64 = 34.0;
const PAD_BOTTOM: f64 = 26.0;
const GLYPH_FONT_SIZE: f64 = 10.0;

pub fn render_from_string(svg_content: &str, path: &Path) -> Result<(), String> {
    std::fs::write(path, svg_content).map_err(|e| e.to_string())
}

pub fn generate_string(plot: &LogoPlot) -> String {
    let mut generator = Generator::new();
    generator.generate(plot);
    generator.buffer
}

struct Generator {
    buffer: String,
}

impl Generator {
    fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    fn generate(&mut self, plot: &LogoPlot) {
        let (width, height) = self.get_dimensions(plot);
        self.start_svg(width, height);
        self.add_background(width, height);
        self.add_title(plot, width);
        self.add_axis(plot);
        for (index, column) in plot.columns.iter().enumerate() {
            self.plot_column(plot, index, column);
        }
        self.end_svg();
    }

    fn get_dimensions(&self, plot: &LogoPlot) -> (f64, f64) {
        let width = PAD_LEFT + plot.columns.len() as f64 * COLUMN_WIDTH + PAD_RIGHT;
        let height = PAD_TOP + plot.max_bits * BITS_SCALE + PAD_BOTTOM;
        (width, height)
    }

    fn baseline(&self, plot: &LogoPlot) -> f64 {
        PAD_TOP + plot.max_bits * BITS_SCALE
    }

    fn start_svg(&mut self, width: f64, height: f64) {
        writeln!(
            self.buffer,
            r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
            width, height
        )
        .unwrap();
    }

    fn add_background(&mut self, width: f64, height: f64) {
        writeln!(
            self.buffer,
            r#"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
            width, height
        )
        .unwrap();
    }

    fn add_title(&mut self, plot: &LogoPlot, width: f64) {
        let style = r#"font-family="monospace" font-weight="bold" font-size="16px""#;
        writeln!(
            self.buffer,
            r#"<text x="{}" y="20" text-anchor="middle" {}>{}</text>"#,
            width / 2.0,
            style,
            plot.title
        )
        .unwrap();
    }

    fn add_axis(&mut self, plot: &LogoPlot) {
        let baseline = self.baseline(plot);
        writeln!(
            self.buffer,
            r#"<line x1="{x}" y1="{top}" x2="{x}" y2="{bottom}" stroke="black"/>"#,
            x = PAD_LEFT - 4.0,
            top = PAD_TOP,
            bottom = baseline
        )
        .unwrap();

        let mut bits = 0.0;
        while bits <= plot.max_bits {
            let y = baseline - bits * BITS_SCALE;
            writeln!(
                self.buffer,
                r#"<line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="black"/>"#,
                PAD_LEFT - 8.0,
                PAD_LEFT - 4.0,
                y = y
            )
            .unwrap();
            writeln!(
                self.buffer,
                r#"<text x="{}" y="{}" text-anchor="end" font-family="monospace" font-size="10px">{}</text>"#,
                PAD_LEFT - 10.0,
                y + 3.0,
                bits
            )
            .unwrap();
            bits += 1.0;
        }

        writeln!(
            self.buffer,
            r#"<text x="12" y="{}" transform="rotate(-90 12 {})" text-anchor="middle" font-family="monospace" font-size="11px">bits</text>"#,
            (PAD_TOP + baseline) / 2.0,
            (PAD_TOP + baseline) / 2.0
        )
        .unwrap();
    }

    fn plot_column(&mut self, plot: &LogoPlot, index: usize, column: &crate::Column) {
        let x = PAD_LEFT + index as f64 * COLUMN_WIDTH;
        let baseline = self.baseline(plot);

        let mut y = baseline;
        for glyph in &column.glyphs {
            let glyph_height = glyph.height * BITS_SCALE;
            if glyph_height <= 0.0 {
                continue;
            }
            // A monospace digit at font-size 10 has cap height ~7.5 px; scale
            // the glyph box so the letter fills its slice of the stack
            let x_scale = COLUMN_WIDTH / (GLYPH_FONT_SIZE * 0.6);
            let y_scale = glyph_height / (GLYPH_FONT_SIZE * 0.75);
            writeln!(
                self.buffer,
                r#"<text x="0" y="0" transform="translate({tx} {ty}) scale({sx:.3} {sy:.3})" font-family="monospace" font-weight="bold" font-size="{fs}px" fill="{color}">{base}</text>"#,
                tx = x,
                ty = y,
                sx = x_scale,
                sy = y_scale,
                fs = GLYPH_FONT_SIZE,
                color = glyph.color,
                base = glyph.base
            )
            .unwrap();
            y -= glyph_height;
        }

        writeln!(
            self.buffer,
            r#"<text x="{}" y="{}" text-anchor="middle" font-family="monospace" font-size="10px">{}</text>"#,
            x + COLUMN_WIDTH / 2.0,
            baseline + 14.0,
            index + 1
        )
        .unwrap();
    }

    fn end_svg(&mut self) {
        writeln!(self.buffer, "</svg>").unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logo::{Column, Glyph};

    fn toy_plot() -> LogoPlot {
        LogoPlot {
            title: "TOY".to_string(),
            columns: vec![
                Column {
                    glyphs: vec![Glyph {
                        base: 'A',
                        height: 2.0,
                        color: "#109648".to_string(),
                    }],
                },
                Column {
                    glyphs: vec![
                        Glyph {
                            base: 'C',
                            height: 0.3,
                            color: "#255C99".to_string(),
                        },
                        Glyph {
                            base: 'G',
                            height: 0.9,
                            color: "#F7B32B".to_string(),
                        },
                    ],
                },
            ],
            max_bits: 2.0,
        }
    }

    #[test]
    fn svg_contains_every_glyph() {
        let svg = generate_string(&toy_plot());
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(">A</text>"));
        assert!(svg.contains(">C</text>"));
        assert!(svg.contains(">G</text>"));
        assert!(svg.contains("TOY"));
    }

    #[test]
    fn svg_labels_every_position() {
        let svg = generate_string(&toy_plot());
        assert!(svg.contains(">1</text>"));
        assert!(svg.contains(">2</text>"));
    }
}
