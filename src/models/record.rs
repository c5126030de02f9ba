// Standard library
use std::fmt;

// Project imports
use crate::utility::ip_detector::types::IpVersion;

/// Address record types managed by this tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    Aaaa,
}

impl RecordType {
    /// Numeric RR type code as it appears in DNS answers.
    pub fn type_code(self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::Aaaa => 28,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
        }
    }

    pub fn ip_version(self) -> IpVersion {
        match self {
            RecordType::A => IpVersion::V4,
            RecordType::Aaaa => IpVersion::V6,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The record a write is supposed to leave behind at the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordIntent {
    pub record_type: RecordType,
    pub name: String,
    pub content: String,
    pub ttl: u32,
}

/// A record as echoed back by a provider after a write.
///
/// The type is kept as the raw string the provider sent so that a
/// mismatching echo can be reported verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
}
