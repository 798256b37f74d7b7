//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `notify`, `ui`) so individual components
//! can depend on small focused models. Each is a plain struct held in an
//! `RwSignal` provided via context at the app root.

pub mod auth;
pub mod notify;
pub mod ui;
