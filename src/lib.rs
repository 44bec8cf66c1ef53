//! # Voxdo - Voice-enabled to-do client
//!
//! A command-line client for a remote task service: list, add, complete and
//! delete tasks, with category/date filtering and voice-to-text task entry.
//!
//! ## Features
//!
//! - **Task Management**: Create, toggle, and delete tasks on the remote service
//! - **Filtering**: Category and due-date bucket filters forwarded to the server
//! - **Voice Entry**: One-shot recognition sessions producing a task from speech
//! - **Audio Upload**: Server-side transcription of pre-recorded audio
//! - **Thin Client**: No local persistence; the server owns ordering and
//!   derived fields, the client refetches after every mutation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use voxdo::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
