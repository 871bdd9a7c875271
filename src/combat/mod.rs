pub mod resolution;

pub use resolution::{mitigated_damage, resolve_round, RoundOutcome};
