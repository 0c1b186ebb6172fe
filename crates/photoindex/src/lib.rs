//! # photoindex
//!
//! A device-local photo catalog: an ordered list of captured photos persisted
//! in two independent stores, kept consistent across capture, load, and delete.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI Client (photoindex-cli, or any other host)              │
//! │  - Provides CaptureSource and ConfirmationGate impls        │
//! │  - Renders CmdResult                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the PhotoIndex handle and capture settings          │
//! │  - Dispatches to command modules                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*)                                 │
//! │  - Display index resolution, confirmation, messages         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  PhotoIndex (index.rs)                                      │
//! │  - add / load / delete / reconcile                          │
//! │  - Write ordering across the two stores                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Stores (store/*)                                           │
//! │  - MetadataStore: whole-catalog JSON under one key          │
//! │  - BlobStore: one file per photo                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - **PhotoIndex and commands**: unit tests over the in-memory stores, which
//!   can inject read, write, and delete failures.
//! - **Filesystem stores**: tests against `tempfile` directories.
//! - **CLI**: end-to-end tests in the `photoindex-cli` crate.

pub mod api;
pub mod capture;
pub mod commands;
pub mod config;
pub mod error;
pub mod gate;
pub mod index;
pub mod init;
pub mod model;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
