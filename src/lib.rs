//! Keyboard-driven arithmetic evaluator.
//!
//! The [`engine`] owns the token history and the fixed-order reduction; the
//! [`app`] and [`ui`] modules wrap it in a terminal front-end.

pub mod app;
pub mod engine;
pub mod input;
pub mod logging;
pub mod ui;
