//! UI rendering module for the console.
//!
//! Holds the component system, the composed shell view, the theme layer,
//! and the event-loop runtime.

pub mod components;
pub mod runtime;
pub mod shell;
pub mod theme;
