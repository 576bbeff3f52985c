//! # Operations
//!
//! The use cases the CLI exposes, one module per screen of the system:
//! company and product registration, inventory reporting, and the
//! proof-of-existence panel. Each operation takes the client and the stores
//! it needs as explicit arguments - no ambient state.

pub mod company;
pub mod inventory;
pub mod product;
pub mod proof;
