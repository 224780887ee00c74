pub mod parser;
pub mod types;

// Re-export main types
pub use parser::{parse_class, ParseError};
pub use types::{Modifier, ParsedClass};
