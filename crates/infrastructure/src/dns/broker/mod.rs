pub mod racing;

pub use racing::RacingConnector;
