/*!
The tableau engine: branches, model extraction, and the expansion loop that drives
a seeded signed formula to saturation under a [logic definition](crate::logic::LogicDefinition).

Everything here is purely syntactic. A [Branch](branch::Branch) only ever consults a
[SignSystem](crate::structures::sign::SignSystem) for closure; [models](model::Model)
are read off a saturated branch after the fact, and only there does a
[TruthValueSystem](crate::structures::truth_value::TruthValueSystem) enter the picture.
*/

pub mod branch;
pub mod engine;
pub mod model;

pub use engine::{entails, solve};
