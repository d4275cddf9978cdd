mod credentials;
mod error;
mod local;
mod manager;
mod remote;

pub use credentials::*;
pub use error::*;
pub use manager::*;
