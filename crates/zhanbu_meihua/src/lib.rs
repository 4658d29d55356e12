//! Meihua Yishu hexagram casting engine.
//!
//! Two entry modes share one derivation: a time-based casting seeded by
//! the lunar date and double hour, and a numeric casting seeded by two or
//! three integers. The derivation builds the primary hexagram from an
//! upper/lower trigram pair, takes the mutual hexagram from the middle
//! four lines, flips the changed line for the changed hexagram, assigns
//! the body and use trigrams, and classifies their five-element relation.
//! Every intermediate is kept on the result for auditability.

pub mod casting;
pub mod error;
pub mod hexagram;
pub mod relation;

pub use casting::{
    CastMethod, Casting, NumberFigures, TimeFigures, cast_by_instant, cast_by_numbers,
    cast_by_time, digit_sum, num_to_line, num_to_trigram,
};
pub use error::CastError;
pub use hexagram::{HexagramFigure, LinePattern, RolePosition, TrigramRole};
pub use relation::ElementRelation;
