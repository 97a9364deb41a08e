//! # Librarium
//!
//! An in-memory catalog for a small library:
//! - Book records with first-match lookup by title, author, or ISBN
//! - Stable sorting by title or author
//! - Borrow/return with a first-come-first-served waitlist
//! - A menu-driven operator shell
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Operator Shell                            │
//! │            (stdin/stdout, script file, buffers)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command / Response
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Library                                 │
//! │                 (one Mutex, &self API)                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Books    │          │  Waitlist   │
//!   │  (ordered)  │          │   (FIFO)    │
//!   └─────────────┘          └─────────────┘
//!          Catalog (single-threaded core)
//! ```
//!
//! ## Example
//!
//! ```
//! use librarium::{Library, ReturnOutcome};
//!
//! let library = Library::new();
//! library.add("A Tale", "X", "111");
//! library.borrow("111", "Alice");
//! library.borrow("111", "Bob");
//!
//! assert_eq!(
//!     library.return_book("111"),
//!     ReturnOutcome::HandedTo { next_borrower: "Bob".to_string() }
//! );
//! assert!(!library.is_available("111"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod catalog;
pub mod protocol;
pub mod shell;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LibraryError, Result};
pub use config::Config;
pub use catalog::{Book, BorrowOutcome, Catalog, RemoveOutcome, ReturnOutcome};
pub use engine::Library;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Librarium
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
