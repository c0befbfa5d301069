pub mod normalize;
pub mod resolver;
pub mod synonyms;

pub use normalize::normalize_header;
pub use resolver::{ColumnMap, ResolvedColumn, resolve};
