//! Single test binary entry point.
//!
//! Structure:
//! - helpers: Builders and gesture shortcuts
//! - integration: Multi-event workflows through the editor
//! - unit: Single-component tests against the public API
