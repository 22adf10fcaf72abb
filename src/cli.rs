use crate::utils::Result;
use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{io::Write, path::Path};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="simreg",
          version=&**FULL_VERSION,
          about="Simulator of synthetic regulatory DNA for motif-density classification tasks",
          long_about = None,
          disable_help_subcommand = true,
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Simulate a labeled motif-density dataset")]
    Simulate(SimulateArgs),
    #[clap(about = "Render a motif as a sequence logo")]
    Plot(PlotArgs),
    #[clap(about = "List the built-in motif registry")]
    List,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("simulate")))]
#[command(arg_required_else_help(true))]
pub struct SimulateArgs {
    #[clap(required = true)]
    #[clap(short = 'm')]
    #[clap(long = "motif")]
    #[clap(help = "Identifier of the motif to embed (see the list command)")]
    #[clap(value_name = "MOTIF")]
    pub motif: String,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output-prefix")]
    #[clap(help = "Prefix for output files")]
    #[clap(value_name = "OUTPUT_PREFIX")]
    #[arg(value_parser = check_prefix_path)]
    pub output_prefix: String,

    #[clap(short = 'l')]
    #[clap(long = "seq-len")]
    #[clap(help = "Length of each simulated sequence in bp")]
    #[clap(value_name = "SEQ_LEN")]
    #[clap(default_value = "1000")]
    pub seq_len: usize,

    #[clap(long = "gc")]
    #[clap(value_name = "GC")]
    #[clap(help = "Background GC fraction")]
    #[clap(default_value = "0.4")]
    #[arg(value_parser = ensure_unit_float)]
    pub gc_frac: f64,

    #[clap(long = "center-size")]
    #[clap(value_name = "CENTER_SIZE")]
    #[clap(help = "Size of the central window holding positive-class motifs")]
    #[clap(default_value = "150")]
    pub center_size: usize,

    #[clap(long = "min-motifs")]
    #[clap(value_name = "MIN")]
    #[clap(help = "Minimum number of motif instances per sequence")]
    #[clap(default_value = "2")]
    pub min_motifs: usize,

    #[clap(long = "max-motifs")]
    #[clap(value_name = "MAX")]
    #[clap(help = "Maximum number of motif instances per sequence")]
    #[clap(default_value = "4")]
    pub max_motifs: usize,

    #[clap(long = "num-pos")]
    #[clap(value_name = "NUM_POS")]
    #[clap(help = "Number of positive sequences")]
    #[clap(default_value = "5000")]
    pub num_pos: usize,

    #[clap(long = "num-neg")]
    #[clap(value_name = "NUM_NEG")]
    #[clap(help = "Number of negative sequences")]
    #[clap(default_value = "5000")]
    pub num_neg: usize,

    #[clap(long = "test-size")]
    #[clap(value_name = "TEST_SIZE")]
    #[clap(help = "Number of sequences held out for the test partition")]
    #[clap(default_value = "1000")]
    pub test_size: usize,

    #[clap(long = "validation-size")]
    #[clap(value_name = "VALIDATION_SIZE")]
    #[clap(help = "Number of sequences held out for the validation partition")]
    #[clap(default_value = "1000")]
    pub validation_size: usize,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "seed")]
    #[clap(value_name = "SEED")]
    #[clap(help = "Random seed")]
    #[clap(default_value = "42")]
    pub seed: u64,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "gzip")]
    #[clap(help = "Compress the sequence output with gzip")]
    pub gzip: bool,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("plot")))]
#[command(arg_required_else_help(true))]
pub struct PlotArgs {
    #[clap(required = true)]
    #[clap(short = 'm')]
    #[clap(long = "motif")]
    #[clap(help = "Identifier of the motif to render")]
    #[clap(value_name = "MOTIF")]
    pub motif: String,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "image")]
    #[clap(help = "Output image path")]
    #[clap(value_name = "IMAGE")]
    #[arg(value_parser = check_image_path)]
    pub output_path: String,

    #[clap(long = "reverse-complement")]
    #[clap(help = "Render the reverse complement of the motif")]
    pub reverse_complement: bool,
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_prefix_path(s: &str) -> Result<String> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(s.to_string())
}

fn check_image_path(s: &str) -> Result<String> {
    let extensions = ["svg", "png", "pdf"];
    let path = Path::new(s);
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if extensions.contains(&ext.to_lowercase().as_str()) => {
            check_prefix_path(s)
        }
        _ => Err(format!(
            "Image path must end in one of {}: {}",
            extensions.join(", "),
            s
        )),
    }
}

fn ensure_unit_float(s: &str) -> Result<f64> {
    let value = s
        .parse::<f64>()
        .map_err(|e| format!("Could not parse float: {}", e))?;
    if !(0.0..=1.0).contains(&value) {
        Err(format!("The value must be in [0, 1], got {}", value))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_float_parser_accepts_bounds() {
        assert_eq!(ensure_unit_float("0"), Ok(0.0));
        assert_eq!(ensure_unit_float("1"), Ok(1.0));
        assert!(ensure_unit_float("1.5").is_err());
        assert!(ensure_unit_float("x").is_err());
    }

    #[test]
    fn image_path_requires_supported_extension() {
        assert!(check_image_path("logo.svg").is_ok());
        assert!(check_image_path("logo.PNG").is_ok());
        assert!(check_image_path("logo.jpeg").is_err());
        assert!(check_image_path("logo").is_err());
    }
}
