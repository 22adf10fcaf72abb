pub mod list;
pub mod plot;
pub mod simulate;
