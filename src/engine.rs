//! Engine Module
//!
//! The shared library engine that owns a catalog and serves operations on it.
//!
//! ## Responsibilities
//! - Own one `Catalog` (records + waitlist) per instance; no process globals
//! - Serialize every operation behind a single lock
//! - Route operator commands to catalog operations
//! - Log every state change

use parking_lot::Mutex;

use crate::catalog::{Book, BorrowOutcome, Catalog, RemoveOutcome, ReturnOutcome};
use crate::protocol::{Command, Response};

/// The library engine
///
/// ## Concurrency Model: One Lock
///
/// Records and waitlist live behind the same `Mutex`. `return_book` has to pop
/// the waitlist head and keep the book checked out as one step, otherwise a
/// concurrent `borrow` could see the book available in between and take it
/// twice. Every method acquires the lock exactly once and never calls another
/// locking method while holding it.
///
/// Read methods hand back owned copies so no guard escapes.
#[derive(Debug, Default)]
pub struct Library {
    catalog: Mutex<Catalog>,
}

impl Library {
    /// Create an engine over an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine over an existing catalog
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Mutex::new(catalog),
        }
    }

    /// Execute a command
    ///
    /// Routes commands to the matching operation. Never fails: misses and
    /// unavailability come back as informational responses.
    pub fn execute(&self, command: Command) -> Response {
        match command {
            Command::Add {
                title,
                author,
                isbn,
            } => {
                self.add(title, author, isbn);
                Response::Added
            }
            Command::Remove { isbn } => self.remove(&isbn).into(),
            Command::List => Response::Listing(self.list()),
            Command::FindByTitle { title } => self.find_by_title(&title).into(),
            Command::FindByAuthor { author } => self.find_by_author(&author).into(),
            Command::FindByIsbn { isbn } => self.find_by_isbn(&isbn).into(),
            Command::SortByTitle => {
                self.sort_by_title();
                Response::Sorted
            }
            Command::SortByAuthor => {
                self.sort_by_author();
                Response::Sorted
            }
            Command::Borrow { isbn, borrower } => self.borrow(&isbn, borrower).into(),
            Command::Return { isbn } => self.return_book(&isbn).into(),
            Command::Waitlist => Response::Waitlist(self.waitlist_snapshot()),
        }
    }

    // =========================================================================
    // Record Store
    // =========================================================================

    /// Append a new available book
    pub fn add(
        &self,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) {
        let (title, author, isbn) = (title.into(), author.into(), isbn.into());
        tracing::debug!(%isbn, %title, %author, "adding book");
        self.catalog.lock().add(title, author, isbn);
    }

    /// Delete the first record with the isbn
    pub fn remove(&self, isbn: &str) -> RemoveOutcome {
        let outcome = self.catalog.lock().remove(isbn);
        match outcome {
            RemoveOutcome::Removed => tracing::debug!(%isbn, "removed book"),
            RemoveOutcome::NotFound => tracing::debug!(%isbn, "remove: book not found"),
        }
        outcome
    }

    /// Snapshot of every record in current order
    pub fn list(&self) -> Vec<Book> {
        self.catalog.lock().list().to_vec()
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    pub fn find_by_title(&self, title: &str) -> Option<Book> {
        self.catalog.lock().find_by_title(title).cloned()
    }

    pub fn find_by_author(&self, author: &str) -> Option<Book> {
        self.catalog.lock().find_by_author(author).cloned()
    }

    pub fn find_by_isbn(&self, isbn: &str) -> Option<Book> {
        self.catalog.lock().find_by_isbn(isbn).cloned()
    }

    pub fn is_available(&self, isbn: &str) -> bool {
        self.catalog.lock().is_available(isbn)
    }

    // =========================================================================
    // Ordering
    // =========================================================================

    pub fn sort_by_title(&self) {
        self.catalog.lock().sort_by_title();
        tracing::debug!("sorted catalog by title");
    }

    pub fn sort_by_author(&self) {
        self.catalog.lock().sort_by_author();
        tracing::debug!("sorted catalog by author");
    }

    // =========================================================================
    // Borrowing
    // =========================================================================

    /// Borrow a book, or join the waitlist if it is missing or out
    pub fn borrow(&self, isbn: &str, borrower: impl Into<String>) -> BorrowOutcome {
        let outcome = self.catalog.lock().borrow(isbn, borrower);
        match &outcome {
            BorrowOutcome::Borrowed { borrower } => {
                tracing::debug!(%isbn, %borrower, "book borrowed")
            }
            BorrowOutcome::Queued { borrower } => {
                tracing::info!(%isbn, %borrower, "book unavailable, borrower queued")
            }
        }
        outcome
    }

    /// Return a book, handing it to the next waiting borrower if any
    pub fn return_book(&self, isbn: &str) -> ReturnOutcome {
        let outcome = self.catalog.lock().return_book(isbn);
        match &outcome {
            ReturnOutcome::Returned => tracing::debug!(%isbn, "book returned"),
            ReturnOutcome::HandedTo { next_borrower } => {
                tracing::info!(%isbn, %next_borrower, "book handed to next borrower")
            }
            ReturnOutcome::NoOp => {
                tracing::debug!(%isbn, "return: already available or not found")
            }
        }
        outcome
    }

    /// Copy of the waitlist, head first
    pub fn waitlist_snapshot(&self) -> Vec<String> {
        self.catalog.lock().waitlist_snapshot()
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of records
    pub fn len(&self) -> usize {
        self.catalog.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.lock().is_empty()
    }

    /// Number of queued borrowers
    pub fn waitlist_len(&self) -> usize {
        self.catalog.lock().waitlist_len()
    }

    /// Consume the engine and take back the catalog
    pub fn into_catalog(self) -> Catalog {
        self.catalog.into_inner()
    }
}
