#![allow(dead_code, unused_imports)]
mod mock_channel;

pub use mock_channel::{MockResponseChannel, Written};
