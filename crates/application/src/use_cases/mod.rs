pub mod lookup;
pub mod resolve;

// Re-export use cases
pub use lookup::LookupRecordsUseCase;
pub use resolve::ResolveIterativelyUseCase;
