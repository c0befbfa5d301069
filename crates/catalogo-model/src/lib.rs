pub mod field;
pub mod record;
pub mod schema;
pub mod value;

pub use field::CanonicalField;
pub use record::OutputRecord;
pub use schema::{OUTPUT_COLUMNS, OUTPUT_SHEET_NAME, column_index};
pub use value::CellValue;
