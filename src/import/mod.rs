pub mod delimited;

pub use delimited::{Delimiter, load_deck, parse_deck};
