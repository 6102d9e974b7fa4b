//! Warden - quorum-gated secrets and TOTP vault for teams.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Create a vault
//! │   ├── member        # Membership management
//! │   ├── secret        # Enroll stored / TOTP-backed secrets
//! │   ├── request       # Open a disclosure request
//! │   ├── vote          # Approve or deny a request
//! │   ├── status        # Inspect a request
//! │   ├── pending       # List unresolved requests
//! │   └── reveal        # Release the secret once quorum is met
//! └── core/             # Core library components
//!     ├── domain        # Entity records (requests, votes, seeds, vaults)
//!     ├── codec/        # Envelope encryption + one-time code derivation
//!     ├── quorum        # Approval state machine
//!     ├── store/        # Store/Membership traits, memory + file backends
//!     └── warden        # Secret release façade
//! ```
//!
//! # Features
//!
//! - Unanimous-approval gate in front of every secret release
//! - TOTP seeds envelope-encrypted at rest (AES-256-GCM)
//! - RFC 4226/6238 one-time code derivation
//! - Append-only request/vote records as an audit trail

pub mod cli;
pub mod core;
pub mod error;
