//! Error taxonomy for the Bistro catalog
//!
//! Every failure surfaced by the HTTP client or the catalog manager is
//! classified into one [`ErrorKind`]:
//!
//! - [`ErrorKind::NetworkFailure`]: the request could not complete (connection, timeout)
//! - [`ErrorKind::ServerRejection`]: the API answered with a non-success status
//!   or a body that could not be decoded
//! - [`ErrorKind::ValidationFailure`]: a client-side constraint stopped the
//!   request before it was sent
//!
//! # Example
//!
//! ```
//! use shared::error::ErrorKind;
//!
//! assert_eq!(ErrorKind::from_status(503), Some(ErrorKind::ServerRejection));
//! assert_eq!(ErrorKind::from_status(201), None);
//! ```

mod kind;

pub use kind::ErrorKind;
