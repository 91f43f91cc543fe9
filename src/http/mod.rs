//! HTTP layer: request dispatch, body encoding and the transport seam.
//!
//! The public pieces are re-exported from the crate root.

pub(crate) mod common;
pub(crate) mod dispatch;
pub(crate) mod error_helpers;
pub(crate) mod loud_wire;
pub(crate) mod transport;
