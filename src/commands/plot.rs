use crate::cli::PlotArgs;
use crate::motifs::{base_index, get_motif, Pwm, BASES};
use crate::utils::Result;
use seqlogo::{Column, Glyph, LogoPlot};
use std::path::Path;

// A, C, G, T
const BASE_COLORS: [&str; 4] = ["#109648", "#255C99", "#F7B32B", "#D62839"];

pub fn plot(args: PlotArgs) -> Result<()> {
    let pwm = get_motif(&args.motif)
        .ok_or_else(|| format!("Unknown motif {:?}", args.motif))?;
    let pwm = if args.reverse_complement {
        pwm.reverse_complement()
    } else {
        pwm.clone()
    };
    let logo = logo_from_pwm(&pwm);
    seqlogo::generate_image(&logo, Path::new(&args.output_path))?;
    log::info!("Wrote sequence logo to {}", args.output_path);
    Ok(())
}

fn logo_from_pwm(pwm: &Pwm) -> LogoPlot {
    let columns = pwm
        .information_content()
        .iter()
        .map(|heights| {
            let mut glyphs: Vec<Glyph> = BASES
                .iter()
                .zip(heights)
                .filter(|(_, &height)| height > 0.005)
                .map(|(&base, &height)| Glyph {
                    base: base as char,
                    height,
                    color: BASE_COLORS[base_index(base).expect("canonical base")].to_string(),
                })
                .collect();
            // Stacked bottom to top, tallest glyph on top
            glyphs.sort_by(|a, b| a.height.partial_cmp(&b.height).unwrap());
            Column { glyphs }
        })
        .collect();
    LogoPlot {
        title: pwm.name().to_string(),
        columns,
        max_bits: 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_columns_match_motif_length() {
        let pwm = get_motif("GATA1").unwrap();
        let logo = logo_from_pwm(pwm);
        assert_eq!(logo.title, "GATA1");
        assert_eq!(logo.columns.len(), 6);
    }

    #[test]
    fn glyphs_are_stacked_by_height() {
        let pwm = get_motif("CTCF").unwrap();
        let logo = logo_from_pwm(pwm);
        for column in &logo.columns {
            assert!(!column.glyphs.is_empty());
            assert!(column
                .glyphs
                .windows(2)
                .all(|pair| pair[0].height <= pair[1].height));
        }
    }

    #[test]
    fn column_height_never_exceeds_two_bits() {
        let pwm = get_motif("MYC").unwrap();
        for column in &logo_from_pwm(pwm).columns {
            let total: f64 = column.glyphs.iter().map(|g| g.height).sum();
            assert!(total <= 2.0 + 1e-9);
        }
    }
}
