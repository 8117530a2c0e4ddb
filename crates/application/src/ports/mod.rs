mod response_channel;

pub use response_channel::ResponseChannel;
