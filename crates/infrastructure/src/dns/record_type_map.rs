//! Mapping between `xip_dns_domain::RecordType` and `hickory_proto::rr::RecordType`

use hickory_proto::rr::RecordType as HickoryRecordType;
use xip_dns_domain::RecordType;

/// Maps decoded hickory query types onto the domain record types
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Every hickory type maps; the ones the dispatcher does not
    /// distinguish become `RecordType::Other`.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        RecordType::from_u16(u16::from(hickory_type))
    }
}
