pub mod broker;
pub mod codec;
pub mod lookup;
pub mod transport;

pub use broker::RacingConnector;
pub use codec::HickoryMessageCodec;
pub use lookup::{BlockingLookup, IterativeLookup};
pub use transport::tcp::TcpConnection;
