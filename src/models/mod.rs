pub mod record;

pub use record::{DnsRecord, RecordIntent, RecordType};
