mod resolve_iteratively;

pub use resolve_iteratively::ResolveIterativelyUseCase;
