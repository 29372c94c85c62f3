//! Common value types for policy-routing orchestration.
//!
//! This crate provides type-safe representations of the primitives the
//! policy-routing control plane builds on:
//!
//! - [`IpAddress`]: IPv4 and IPv6 addresses
//! - [`IntfId`]: switch interface identifiers
//! - [`MplsLabel`]: 20-bit MPLS label values
//! - [`MplsActionType`]: MPLS label switching operations

mod intf;
mod ip;
mod mpls;

pub use intf::IntfId;
pub use ip::IpAddress;
pub use mpls::{MplsActionType, MplsLabel};

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid IP address format: {0}")]
    InvalidIpAddress(String),

    #[error("invalid interface id: {0}")]
    InvalidIntfId(String),

    #[error("invalid MPLS label: {0} (must be 0-1048575)")]
    InvalidMplsLabel(u32),

    #[error("invalid MPLS action: {0}")]
    InvalidMplsAction(String),
}
