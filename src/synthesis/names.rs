//! Names of the volumes passed between synthesized steps.

pub const FIRST_RUNNINGS: &str = "first runnings";
pub const MASH_VESSEL: &str = "mash vessel";
pub const SPARGED_WORT: &str = "sparged wort";
pub const STEEPED_WORT: &str = "steeped wort";
pub const BOIL_OUTPUT: &str = "boil output";
pub const HOP_STAND_OUTPUT: &str = "hop stand output";
pub const COOLED_WORT: &str = "cooled wort";
pub const DILUTED_WORT: &str = "diluted wort";
pub const PRIMARY_FERMENTED: &str = "primary fermented beer";
pub const SECONDARY_FERMENTED: &str = "secondary fermented beer";
pub const TERTIARY_FERMENTED: &str = "tertiary fermented beer";
pub const PACKAGED_BEER: &str = "packaged beer";

pub fn mash_volume(index: usize) -> String {
    format!("mash volume {}", index)
}
