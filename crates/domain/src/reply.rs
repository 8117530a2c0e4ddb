use super::ResourceRecord;
use std::fmt;

/// Answer content for a single query. Header fields and the question
/// section are filled in by the transport from the original request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub answers: Vec<ResourceRecord>,
    /// Reserved, never populated today.
    pub additional: Vec<ResourceRecord>,
}

impl Reply {
    pub fn with_answer(record: ResourceRecord) -> Self {
        Self {
            answers: vec![record],
            additional: Vec::new(),
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ";; ANSWER SECTION:")?;
        for record in &self.answers {
            writeln!(f, "{}", record)?;
        }

        if !self.additional.is_empty() {
            writeln!(f)?;
            writeln!(f, ";; ADDITIONAL SECTION:")?;
            for record in &self.additional {
                writeln!(f, "{}", record)?;
            }
        }

        Ok(())
    }
}

/// Synthetic zone transfer: SOA, the A record for the queried name, SOA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneTransferEnvelope {
    pub records: Vec<ResourceRecord>,
}

impl ZoneTransferEnvelope {
    pub fn new(soa: ResourceRecord, address: ResourceRecord) -> Self {
        Self {
            records: vec![soa.clone(), address, soa],
        }
    }
}

impl fmt::Display for ZoneTransferEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}
