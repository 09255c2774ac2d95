//! Linkview renders chat transcripts in the terminal with live, clickable
//! URLs.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`link`] detects URLs in raw message text and splits it into plain and
//!   link segments.
//! - [`ui`] wraps text for display, renders styled lines, and maps mouse
//!   gestures back onto the text: a click on a link opens it, a
//!   press-and-hold copies the message and can flag it for deletion.
//! - [`core`] holds the message model and viewer configuration.
//! - [`utils`] adapts the side effects: the system clipboard and the OS URL
//!   handler.
//!
//! The runtime entrypoint lives in the binary crate (`src/main.rs`), which
//! wires terminal events through [`ui::surface`] and applies the actions it
//! returns.

pub mod core;
pub mod link;
pub mod ui;
pub mod utils;
