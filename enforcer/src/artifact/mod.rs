//! Artifact identity and record types.
//!
//! The two inventories reconciled by verification are independently
//! indexed: local artifacts carry full Maven coordinates, remote records
//! carry the P2 bundle identity plus optional published checksums.
//!
//! # Sub-modules
//!
//! - [`coordinates`] - Maven `groupId:artifactId:version` identity.
//! - [`local`] - Locally resolved artifacts (`LocalArtifact`).
//! - [`remote`] - Remote repository records (`RemoteArtifact`) and the
//!   checksum preference order.

pub mod coordinates;
pub mod local;
pub mod remote;
