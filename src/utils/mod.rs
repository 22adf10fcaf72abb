mod io_utils;
mod math;

pub use io_utils::{create_writer, open_output_writer};
pub use math::{summary_stats, SummaryStats};

pub type Result<T> = std::result::Result<T, String>;

pub fn handle_error_and_exit(err: String) -> ! {
    log::error!("{}", err);
    std::process::exit(1);
}
