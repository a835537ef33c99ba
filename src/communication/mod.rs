//! Communication protocols
//!
//! - `tfp`: Request/response and callback messaging with the host controller
pub mod tfp;
