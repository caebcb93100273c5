//! Trust profile — the stateful façade over scoring, chaining,
//! credentials, policies, and serialization.

pub mod controller;
pub mod snapshot;

pub use controller::TrustProfile;
pub use snapshot::{ProfileSnapshot, SNAPSHOT_SCHEMA};
