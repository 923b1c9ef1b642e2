//! CARLOG Share — stateless share-link tokens: issuance, verification,
//! and the access gate that turns a verified token into a scoped read.

pub mod codec;
pub mod config;
pub mod error;
pub mod gate;
pub mod service;
pub mod token;
pub mod verify;

pub use config::ShareConfig;
pub use error::{ShareLinkError, ShareTokenError};
pub use gate::ShareAccessGate;
pub use service::{ShareLinkOutput, ShareService};
pub use token::ShareToken;
