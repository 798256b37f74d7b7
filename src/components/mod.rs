//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared page chrome while reading/writing shared state
//! from Leptos context providers.

pub mod confirm_dialog;
pub mod pagination;
pub mod toast;
