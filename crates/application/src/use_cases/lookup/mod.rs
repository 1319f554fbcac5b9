mod lookup_records;
mod projection;

pub use lookup_records::LookupRecordsUseCase;
pub use projection::{project_a, project_cname, project_mx, project_ns, project_soa, project_txt};
