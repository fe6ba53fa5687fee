mod exhaustive;
pub use exhaustive::align_exhaustive;
