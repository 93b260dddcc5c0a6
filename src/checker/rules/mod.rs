//! Built-in rule implementations. Each is constructed from one rule-table entry
//! by [`build_rule`](super::build_rule).

mod coverage;
mod duplicates;
mod enums;
mod language;
mod mechanism;
mod pattern;
mod presence;
mod punctuation;
mod sequence;
mod thin;
mod weights;

pub use coverage::CoverageRule;
pub use duplicates::NearDuplicateRule;
pub use enums::{EnumValuesRule, ValueOrder};
pub use language::TermRule;
pub use mechanism::MechanismRule;
pub use pattern::{IdPatternRule, UniqueIdsRule};
pub use presence::RequiredFieldsRule;
pub use punctuation::{PunctuationCheck, PunctuationRule};
pub use sequence::SequenceRule;
pub use thin::ThinContentRule;
pub use weights::{GroupBy, WeightSumRule};

#[cfg(test)]
mod test_fixtures;
