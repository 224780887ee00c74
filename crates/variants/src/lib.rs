pub mod definition;
pub mod error;
pub mod resolve;
pub mod selections;
pub mod table;

// Re-export main types
pub use definition::VariantDefinition;
pub use error::ConfigurationError;
pub use resolve::resolve;
pub use selections::Selections;
pub use table::{CompoundVariant, VariantTable, VariantTableBuilder};
