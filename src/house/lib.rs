//! # House Registry Architecture
//!
//! A registry of the residents and apartments of one building, kept in a
//! single JSON document. The crate is a library with a console shell on top;
//! the shell is one client of the API, not the place where rules live.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (cli/, wired by main.rs)                             │
//! │  - Menu loop, prompts, entry guards, table rendering        │
//! │  - The ONLY place that knows about stdin/stdout/stderr      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the repository           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Field validation, domain preconditions, sorting, reports │
//! │  - Returns CmdResult: leveled messages plus report data     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Repository (repository.rs)                                 │
//! │  - Owns the Document, keeps resident/apartment links paired │
//! │  - Persists after every applied change                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DocumentStore trait                                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain arguments, returns
//! `Result<CmdResult>`, and never prints or exits. Diagnostics go through the
//! `log` macros; the binary decides whether a backend is listening.
//!
//! ## Testing Strategy
//!
//! 1. **Repository and commands**: unit tests over `InMemoryStore`, seeded
//!    with `RegistryFixture`. Most of the testing lives here.
//! 2. **Store**: `FileStore` tests against temporary directories.
//! 3. **API**: dispatch tests and the full add/assign/unassign/remove flow.
//! 4. **Shell**: scripted stdin through the menu loop, and the compiled
//!    binary driven by `assert_cmd` in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business rules and report building
//! - [`repository`]: Document ownership and link consistency
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Record types (`Resident`, `Apartment`, `Document`)
//! - [`validate`]: Field format checks
//! - [`config`]: Configuration management
//! - [`logging`]: File logger bootstrap
//! - [`error`]: Error types
//! - `cli`: Menu loop, prompts and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod repository;
pub mod store;
pub mod validate;
