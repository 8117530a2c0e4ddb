use super::RecordType;
use std::sync::Arc;

/// Single question of an incoming request. The class is always IN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }

    /// Case-insensitive suffix match on label boundaries.
    pub fn is_within(&self, zone: &str) -> bool {
        let name = self.name.trim_end_matches('.').to_ascii_lowercase();
        let zone = zone.trim_end_matches('.').to_ascii_lowercase();

        if zone.is_empty() || name == zone {
            return true;
        }

        name.strip_suffix(&zone)
            .is_some_and(|prefix| prefix.ends_with('.'))
    }
}
