//! Codec Tests
//!
//! Tests for menu parsing, bounded line reading, and response rendering.

use std::io::Cursor;

use librarium::catalog::Book;
use librarium::config::Config;
use librarium::error::LibraryError;
use librarium::protocol::{
    menu_lines, normalize_field, parse_choice, read_line, render_response, write_response,
    Command, Field, MenuChoice, Response, MENU_TITLE,
};

// =============================================================================
// Menu Choice Tests
// =============================================================================

#[test]
fn test_parse_every_menu_number() {
    for number in 1..=12u8 {
        let choice = parse_choice(&number.to_string()).unwrap();
        assert_eq!(choice.number(), number);
    }
}

#[test]
fn test_parse_choice_trims_whitespace() {
    assert_eq!(parse_choice("  7 \t").unwrap(), MenuChoice::BorrowBook);
    assert_eq!(parse_choice("12").unwrap(), MenuChoice::Exit);
}

#[test]
fn test_parse_choice_rejects_out_of_range_and_garbage() {
    for input in ["0", "13", "-1", "", "abc", "1.5", "999"] {
        let result = parse_choice(input);
        assert!(
            matches!(result, Err(LibraryError::Input(_))),
            "expected input error for {:?}",
            input
        );
    }
}

#[test]
fn test_menu_choice_fields() {
    assert_eq!(
        MenuChoice::AddBook.fields(),
        &[Field::Title, Field::Author, Field::Isbn]
    );
    assert_eq!(MenuChoice::BorrowBook.fields(), &[Field::Isbn, Field::Borrower]);
    assert!(MenuChoice::DisplayBooks.fields().is_empty());
    assert!(MenuChoice::Exit.fields().is_empty());
}

#[test]
fn test_into_command_builds_matching_command() {
    let command = MenuChoice::AddBook
        .into_command(vec!["Dune".into(), "Herbert".into(), "42".into()])
        .unwrap();

    assert_eq!(
        command,
        Command::Add {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            isbn: "42".to_string(),
        }
    );
    assert_eq!(command.menu_choice(), MenuChoice::AddBook);
}

#[test]
fn test_into_command_rejects_wrong_arity_and_exit() {
    assert!(MenuChoice::BorrowBook.into_command(vec!["42".into()]).is_none());
    assert!(MenuChoice::Exit.into_command(Vec::new()).is_none());
}

#[test]
fn test_every_non_exit_choice_round_trips_through_command() {
    for choice in MenuChoice::ALL {
        if choice == MenuChoice::Exit {
            continue;
        }
        let values = choice.fields().iter().map(|_| "v".to_string()).collect();
        let command = choice.into_command(values).unwrap();
        assert_eq!(command.menu_choice(), choice);
    }
}

#[test]
fn test_normalize_field_trims_only_isbn() {
    assert_eq!(normalize_field(Field::Isbn, "  111 ".to_string()), "111");
    assert_eq!(
        normalize_field(Field::Title, " The  Hobbit ".to_string()),
        " The  Hobbit "
    );
}

// =============================================================================
// Line Reading Tests
// =============================================================================

#[test]
fn test_read_line_strips_terminators() {
    let mut reader = Cursor::new(b"first\nsecond\r\nlast".to_vec());

    assert_eq!(read_line(&mut reader, 64).unwrap(), Some("first".to_string()));
    assert_eq!(read_line(&mut reader, 64).unwrap(), Some("second".to_string()));
    assert_eq!(read_line(&mut reader, 64).unwrap(), Some("last".to_string()));
    assert_eq!(read_line(&mut reader, 64).unwrap(), None);
}

#[test]
fn test_read_line_empty_line_is_not_eof() {
    let mut reader = Cursor::new(b"\n".to_vec());

    assert_eq!(read_line(&mut reader, 64).unwrap(), Some(String::new()));
    assert_eq!(read_line(&mut reader, 64).unwrap(), None);
}

#[test]
fn test_read_line_accepts_exact_limit() {
    let mut reader = Cursor::new(b"abcd\r\n".to_vec());

    assert_eq!(read_line(&mut reader, 4).unwrap(), Some("abcd".to_string()));
}

#[test]
fn test_read_line_rejects_long_line_and_resyncs() {
    let mut input = vec![b'x'; 100];
    input.extend_from_slice(b"\nnext\n");
    let mut reader = Cursor::new(input);

    let result = read_line(&mut reader, 10);
    assert!(matches!(result, Err(LibraryError::Input(_))));

    assert_eq!(read_line(&mut reader, 10).unwrap(), Some("next".to_string()));
}

#[test]
fn test_read_line_rejects_one_byte_over() {
    let mut reader = Cursor::new(b"abcde\n".to_vec());

    assert!(matches!(
        read_line(&mut reader, 4),
        Err(LibraryError::Input(_))
    ));
    assert_eq!(read_line(&mut reader, 4).unwrap(), None);
}

#[test]
fn test_read_line_with_unbounded_limit() {
    let config = Config::builder().max_line_len(usize::MAX).build();
    config.validate().unwrap();

    let mut reader = Cursor::new(b"hello\nworld\n".to_vec());

    assert_eq!(
        read_line(&mut reader, config.max_line_len).unwrap(),
        Some("hello".to_string())
    );
    assert_eq!(
        read_line(&mut reader, config.max_line_len).unwrap(),
        Some("world".to_string())
    );
    assert_eq!(read_line(&mut reader, config.max_line_len).unwrap(), None);
}

#[test]
fn test_read_line_rejects_invalid_utf8() {
    let mut reader = Cursor::new(vec![0xff, 0xfe, b'\n']);

    assert!(matches!(
        read_line(&mut reader, 64),
        Err(LibraryError::Input(_))
    ));
}

// =============================================================================
// Rendering Tests
// =============================================================================

#[test]
fn test_menu_lines() {
    let lines = menu_lines();

    assert_eq!(lines[1], MENU_TITLE);
    assert_eq!(lines[2], "1. Add Book");
    assert_eq!(lines.last().unwrap(), "12. Exit");
    assert_eq!(lines.len(), 14);
}

#[test]
fn test_render_silent_responses() {
    assert!(render_response(&Response::Added).is_empty());
    assert!(render_response(&Response::Removed).is_empty());
    assert!(render_response(&Response::Sorted).is_empty());
    assert!(render_response(&Response::Listing(Vec::new())).is_empty());
}

#[test]
fn test_render_listing() {
    let mut borrowed = Book::new("B Tale", "Y", "222");
    borrowed.available = false;
    let response = Response::Listing(vec![Book::new("A Tale", "X", "111"), borrowed]);

    assert_eq!(
        render_response(&response),
        vec![
            "Title: A Tale, Author: X, ISBN: 111, Availability: Available",
            "Title: B Tale, Author: Y, ISBN: 222, Availability: Not Available",
        ]
    );
}

#[test]
fn test_render_borrow_and_return_messages() {
    assert_eq!(
        render_response(&Response::Borrowed {
            borrower: "Alice".to_string()
        }),
        vec!["Book borrowed by Alice."]
    );
    assert_eq!(
        render_response(&Response::Queued {
            borrower: "Bob".to_string()
        }),
        vec!["Book is not available. You have been added to the waitlist."]
    );
    assert_eq!(render_response(&Response::Returned), vec!["Book returned."]);
    assert_eq!(
        render_response(&Response::HandedTo {
            next_borrower: "Bob".to_string()
        }),
        vec!["Book returned. Next borrower is Bob."]
    );
    assert_eq!(
        render_response(&Response::AlreadyAvailable),
        vec!["Book is already available or not found."]
    );
    assert_eq!(render_response(&Response::NotFound), vec!["Book not found."]);
}

#[test]
fn test_render_waitlist() {
    assert_eq!(
        render_response(&Response::Waitlist(Vec::new())),
        vec!["Waitlist:"]
    );
    assert_eq!(
        render_response(&Response::Waitlist(vec!["A".into(), "B".into()])),
        vec!["Waitlist:", "A", "B"]
    );
}

#[test]
fn test_write_response_terminates_lines() {
    let mut out = Vec::new();

    write_response(&mut out, &Response::Waitlist(vec!["Alice".into()])).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Waitlist:\nAlice\n");
}
