//! Background tasks.
//!
//! Each submodule provides an async function intended to be spawned via
//! `tokio::spawn` after the triggering request has been answered. Tasks are
//! best-effort: failures are logged and never surfaced to the client.

pub mod bib_tagging;
