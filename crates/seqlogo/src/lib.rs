/*!
This crate renders sequence logos: per-position stacks of nucleotide glyphs
whose heights are proportional to information content in bits. Logos can be
rendered as SVG, PNG, and PDF images.

Sequence logos are the standard visualization of position weight matrices.
*/

mod common;
mod image;
mod logo;
mod pdf;
mod png;
mod svg;

pub use common::prepare_svg_tree;
pub use image::generate as generate_image;
pub use logo::{Color, Column, Glyph, LogoPlot};
