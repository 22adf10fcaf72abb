mod background;
mod encode;
mod error;
mod params;
mod placement;
mod sequence_set;
mod simulate;
mod split;

pub use background::{gc_fraction, sample_background};
pub use encode::{decode_one_hot, one_hot};
pub use error::{SimError, SimResult};
pub use params::SimParams;
pub use placement::{place_instances, MotifPlacement, Strand, PLACEMENT_ATTEMPTS};
pub use sequence_set::{Label, LabeledSequence, SequenceSet, Split};
pub use simulate::simulate;
pub use split::assign_splits;
