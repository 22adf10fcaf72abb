use crate::motifs::MOTIF_REGISTRY;
use crate::utils::Result;

pub fn list() -> Result<()> {
    println!("{:<8} {:>6}  {}", "MOTIF", "LENGTH", "CONSENSUS");
    for (name, pwm) in MOTIF_REGISTRY.iter() {
        println!("{:<8} {:>6}  {}", name, pwm.len(), pwm.consensus());
    }
    Ok(())
}
