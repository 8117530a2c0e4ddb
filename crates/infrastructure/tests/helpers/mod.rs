#![allow(dead_code, unused_imports)]
mod builders;
mod recording_channel;

pub use builders::{
    make_handler, message_bytes_with_opcode, query_bytes, query_bytes_without_question,
    DEFAULT_IP, ZONE,
};
pub use recording_channel::{RecordingChannel, Sent};
