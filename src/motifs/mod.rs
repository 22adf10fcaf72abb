mod pwm;
mod registry;

pub use pwm::{base_index, complement, Pwm, BASES};
pub use registry::{get_motif, motif_names, MOTIF_REGISTRY};
