//! Catalog implementation
//!
//! Vector-backed record store with a FIFO waitlist. Single-threaded; see
//! `Library` for the shared, locked form.

use std::collections::VecDeque;

use super::{Book, BorrowOutcome, RemoveOutcome, ReturnOutcome};

/// Book records plus the global waitlist
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
    waitlist: VecDeque<String>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Record Store
    // =========================================================================

    /// Append a new available book. Duplicate isbns are accepted.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) {
        self.books.push(Book::new(title, author, isbn));
    }

    /// Delete the first record with the given isbn. Leaves the waitlist alone.
    pub fn remove(&mut self, isbn: &str) -> RemoveOutcome {
        match self.position_by_isbn(isbn) {
            Some(index) => {
                self.books.remove(index);
                RemoveOutcome::Removed
            }
            None => RemoveOutcome::NotFound,
        }
    }

    /// All records in current order
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    // =========================================================================
    // Lookup (first match in current order, exact and case-sensitive)
    // =========================================================================

    pub fn find_by_title(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.title == title)
    }

    pub fn find_by_author(&self, author: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.author == author)
    }

    pub fn find_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.isbn == isbn)
    }

    /// True only if the first record with this isbn exists and is available
    pub fn is_available(&self, isbn: &str) -> bool {
        self.find_by_isbn(isbn).is_some_and(|book| book.available)
    }

    fn position_by_isbn(&self, isbn: &str) -> Option<usize> {
        self.books.iter().position(|book| book.isbn == isbn)
    }

    // =========================================================================
    // Ordering (stable)
    // =========================================================================

    pub fn sort_by_title(&mut self) {
        self.books.sort_by(|a, b| a.title.cmp(&b.title));
    }

    pub fn sort_by_author(&mut self) {
        self.books.sort_by(|a, b| a.author.cmp(&b.author));
    }

    // =========================================================================
    // Borrowing
    // =========================================================================

    /// Borrow the first record with `isbn`, or queue `borrower` if that
    /// record is missing or already out.
    pub fn borrow(&mut self, isbn: &str, borrower: impl Into<String>) -> BorrowOutcome {
        let borrower = borrower.into();

        match self.books.iter_mut().find(|book| book.isbn == isbn) {
            Some(book) if book.available => {
                book.available = false;
                BorrowOutcome::Borrowed { borrower }
            }
            _ => {
                self.waitlist.push_back(borrower.clone());
                BorrowOutcome::Queued { borrower }
            }
        }
    }

    /// Return the first record with `isbn`.
    ///
    /// If anyone is waiting, the book passes directly to the head of the
    /// waitlist and never becomes observably available.
    pub fn return_book(&mut self, isbn: &str) -> ReturnOutcome {
        let book = match self.books.iter_mut().find(|book| book.isbn == isbn) {
            Some(book) if !book.available => book,
            _ => return ReturnOutcome::NoOp,
        };

        match self.waitlist.pop_front() {
            Some(next_borrower) => ReturnOutcome::HandedTo { next_borrower },
            None => {
                book.available = true;
                ReturnOutcome::Returned
            }
        }
    }

    /// Copy of the waitlist, head first
    pub fn waitlist_snapshot(&self) -> Vec<String> {
        self.waitlist.iter().cloned().collect()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of records
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Number of queued borrowers
    pub fn waitlist_len(&self) -> usize {
        self.waitlist.len()
    }
}
