//! Pure domain logic for the CoolCheck HVAC maintenance-report service.
//!
//! Everything in this crate is synchronous, side-effect free, and safe to
//! call from any number of concurrent request handlers. Persistence, auth,
//! and the HTTP surface live in downstream crates; this crate exposes the
//! diagnostic evaluator, the report edit/version state machine, and the
//! seams those layers plug into.

pub mod airflow;
pub mod capacitor;
pub mod error;
pub mod evaluate;
pub mod parts;
pub mod readings;
pub mod report;
pub mod score;
pub mod service;
pub mod status;
pub mod store;
pub mod system_age;
pub mod types;
pub mod warning;
