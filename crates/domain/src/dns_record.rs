mod record;
mod record_type;

pub use record::{MxRecord, ResourceRecord};
pub use record_type::RecordType;
