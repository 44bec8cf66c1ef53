//! Core library modules for the voxdo client.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Task Synchronization**: In-memory collection with refetch-after-mutation
//! - **Voice Capture**: Recognition session state machine over pluggable engines
//! - **User Interface**: Console table rendering
//!
//! ## Usage
//!
//! ```rust,no_run
//! use voxdo::api::TaskApi;
//! use voxdo::libs::config::Config;
//! use voxdo::libs::controller::TaskListController;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let mut controller = TaskListController::new(TaskApi::new(&config.api_url()?));
//! controller.refresh().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod controller;
pub mod data_storage;
pub mod messages;
pub mod speech;
pub mod task;
pub mod view;
