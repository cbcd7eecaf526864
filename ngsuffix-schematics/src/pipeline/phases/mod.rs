//! Built-in pipeline phases.

mod generate;
mod normalize;
mod plan;
mod rename;
mod resolve;

pub use generate::GeneratePhase;
pub use normalize::NormalizePhase;
pub use plan::PlanPhase;
pub use rename::RenamePhase;
pub use resolve::ResolvePhase;
