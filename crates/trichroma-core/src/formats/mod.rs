//! # Text Formats
//!
//! The two flat text formats at the system boundary:
//! - [`instance`]: the consumed 3-SAT instance format
//! - [`graph_text`]: the produced/consumed `Graph{ ... }` edge-list format
//!
//! Both are one-shot scoped operations: open, read or write fully, close.
//! Parsing errors abort the whole run as [`crate::TrichromaError`]; nothing in
//! here is recovered from.

pub mod graph_text;
pub mod instance;

pub use graph_text::{export_graph, load_graph, parse_graph, render_graph};
pub use instance::{load_instance, parse_instance};
