//! Trust credentials — portable, content-hash-bound exports of one
//! scored snapshot, verifiable without access to the issuing history.

pub mod credential;
pub mod verify;

pub use credential::{issue_credential, TrustCredential};
pub use verify::{check_credential, is_expired, verify_credential, CredentialVerification};
