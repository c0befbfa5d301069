pub mod extract;
pub mod mapper;
pub mod numeric;
pub mod stats;

pub use extract::{DescriptionSource, ExtractedRecord, Extractor};
pub use mapper::{ConvertError, ConvertOptions, map_record};
pub use numeric::NumberFormat;
pub use stats::RunStats;
