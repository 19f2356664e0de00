//! Auto-naming plugin for host text editors.
//!
//! Newly created untitled documents get a generated file path under a
//! user-configured directory and are written to disk right away, so the host's
//! autosave machinery has a real file to track. When such a document is closed
//! without ever receiving content, the file is deleted again.
//!
//! The host editor owns documents, windows, and lifecycle events. This crate
//! plugs into that through the `Document` trait and the `EventRegistry`, and
//! ships a terminal settings panel for the single persisted setting: the
//! new-file directory.

pub mod core;
pub mod tui;
