mod alignment;
pub use alignment::{AlignedColumn, Alignment};

mod alignment_cache;
pub use alignment_cache::{AlignmentCache, CacheEntry};

mod step;
pub use step::AlignStep;
