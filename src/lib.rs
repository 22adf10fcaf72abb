pub mod cli;
pub mod commands;
pub mod motifs;
pub mod sim;
pub mod utils;
