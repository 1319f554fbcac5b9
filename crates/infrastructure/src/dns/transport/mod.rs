pub mod tcp;

pub use tcp::{
    encode_frame, exchange, read_with_length_prefix, send_with_length_prefix, TcpConnection,
    MAX_TCP_MESSAGE_SIZE,
};
