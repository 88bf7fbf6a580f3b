pub mod utils;
pub mod error;
pub mod network;
pub mod address;
pub mod instance;

pub use error::{Error, ErrorKind, AbelResult};
pub use network::Network;
pub use address::AbelAddress;
pub use instance::InstanceAddress;
