mod record_builder;

pub use record_builder::{
    RecordBuilder, A_RECORD_TTL, SOA_EXPIRE, SOA_MINIMUM, SOA_REFRESH, SOA_RETRY, SOA_SERIAL,
    SOA_TTL,
};
