pub mod entry;
pub mod error;
pub mod filter;
pub mod probe;
pub mod scanner;
pub mod size;

pub use entry::Entry;
pub use error::{NukeError, Result, validate_root};
pub use filter::filter_indices;
pub use probe::{UNKNOWN_SIZE, dir_size};
pub use scanner::{ScanConfig, ScanMessage, ScanProgress, Scanner};
pub use size::{format_count, format_size};
