// Synthesis phases, in the order the synthesizer runs them. Mash and steep
// are alternatives chosen by recipe type.

#[path = "00_routing.rs"]
pub mod routing;
#[path = "01_mash.rs"]
pub mod mash;
#[path = "02_steep.rs"]
pub mod steep;
#[path = "03_boil.rs"]
pub mod boil;
#[path = "04_ferment.rs"]
pub mod ferment;
#[path = "05_package.rs"]
pub mod package;

pub use boil::BoilPhase;
pub use ferment::FermentPhase;
pub use mash::MashPhase;
pub use package::PackagePhase;
pub use routing::RoutingPhase;
pub use steep::SteepPhase;
