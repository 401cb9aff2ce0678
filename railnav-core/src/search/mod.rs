//! Station lookup by name: the name index, similarity scorers and the
//! exact-then-fuzzy resolution used by routing.

mod index;
mod resolver;
mod scorer;

pub use index::StationIndex;
pub(crate) use resolver::resolve_pair;
pub use resolver::{StationMatch, resolve_exact, resolve_station, search_stations};
pub use scorer::{FuzzyMatcher, JaroWinklerRatio, PartialRatio, Scorer, SimpleRatio, TokenSetRatio};
