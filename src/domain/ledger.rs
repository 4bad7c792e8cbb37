//! Session ledger mutation
//!
//! Validates and applies append/remove/replace operations on a book's
//! reading sessions, then re-derives progress, status, current page and
//! the start/end dates. These functions are the only writers of derived
//! fields; the store adapter persists whatever it is handed.

use chrono::NaiveDate;
use uuid::Uuid;

use super::errors::DomainError;
use super::progress::{self, Derived};
use crate::models::book::{Book, Session};

/// A session as submitted by the user, before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub date: NaiveDate,
    pub start_page: i32,
    pub end_page: i32,
    pub notes: Option<String>,
}

/// Append a session to the ledger and re-derive.
///
/// `start_date` is set from the earliest-added session when not already
/// set, and never overwritten. `end_date` is only written here when this
/// session completes the book; a completion date set earlier is left
/// alone (removal is what clears it, see `remove_session`).
pub fn add_session(book: &mut Book, input: NewSession) -> Result<(), DomainError> {
    validate_pages(input.start_page, input.end_page, book.total_pages)?;

    let date = input.date;
    book.reading_sessions.push(Session {
        id: Uuid::new_v4().to_string(),
        date,
        start_page: input.start_page,
        end_page: input.end_page,
        notes: input.notes,
    });

    let derived = progress::derive(book.total_pages, &book.reading_sessions);
    apply_derived(book, derived);

    if book.start_date.is_none() {
        book.start_date = book.reading_sessions.first().map(|s| s.date);
    }
    if derived.progress == 100 {
        book.end_date = Some(date);
    }

    Ok(())
}

/// Remove a session by id (no-op when absent) and re-derive.
///
/// Clears `end_date` whenever the recomputed progress drops below 100,
/// even if a different session originally completed the book.
pub fn remove_session(book: &mut Book, session_id: &str) {
    book.reading_sessions.retain(|s| s.id != session_id);

    let derived = progress::derive(book.total_pages, &book.reading_sessions);
    apply_derived(book, derived);

    if derived.progress < 100 {
        book.end_date = None;
    }
}

/// Replace the whole ledger (partial-update bodies carry the full list)
/// and re-derive. Sessions arriving without an id get a fresh one.
pub fn replace_sessions(book: &mut Book, sessions: Vec<Session>) -> Result<(), DomainError> {
    for session in &sessions {
        validate_pages(session.start_page, session.end_page, book.total_pages)?;
    }

    book.reading_sessions = sessions;
    for session in &mut book.reading_sessions {
        if session.id.is_empty() {
            session.id = Uuid::new_v4().to_string();
        }
    }

    rederive(book);
    Ok(())
}

/// Full re-derivation after anything affecting progress changed
/// (a replaced ledger, or a corrected page count).
///
/// `end_date` is the date of the latest session when the book is
/// complete, and cleared otherwise.
pub fn rederive(book: &mut Book) {
    let derived = progress::derive(book.total_pages, &book.reading_sessions);
    apply_derived(book, derived);

    if book.start_date.is_none() {
        book.start_date = book.reading_sessions.first().map(|s| s.date);
    }
    if derived.progress == 100 {
        book.end_date = book
            .reading_sessions
            .iter()
            .max_by_key(|s| s.date)
            .map(|s| s.date);
    } else {
        book.end_date = None;
    }
}

fn apply_derived(book: &mut Book, derived: Derived) {
    book.progress = derived.progress;
    book.status = derived.status;
    book.current_page = derived.current_page;
}

fn validate_pages(start_page: i32, end_page: i32, total_pages: i32) -> Result<(), DomainError> {
    if start_page < 1 {
        return Err(DomainError::Validation(
            "startPage must be at least 1".to_string(),
        ));
    }
    if end_page < start_page {
        return Err(DomainError::Validation(
            "endPage cannot be before startPage".to_string(),
        ));
    }
    if total_pages > 0 && end_page > total_pages {
        return Err(DomainError::Validation(format!(
            "endPage cannot exceed totalPages ({})",
            total_pages
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::progress::ReadingStatus;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn book(total_pages: i32) -> Book {
        Book::new("X".to_string(), "Y".to_string(), total_pages)
    }

    fn new_session(d: u32, start_page: i32, end_page: i32) -> NewSession {
        NewSession {
            date: date(d),
            start_page,
            end_page,
            notes: None,
        }
    }

    #[test]
    fn add_session_assigns_id_and_derives() {
        let mut b = book(300);
        add_session(&mut b, new_session(1, 1, 150)).unwrap();

        assert_eq!(b.reading_sessions.len(), 1);
        assert!(!b.reading_sessions[0].id.is_empty());
        assert_eq!(b.progress, 50);
        assert_eq!(b.status, ReadingStatus::Reading);
        assert_eq!(b.current_page, 150);
        assert_eq!(b.start_date, Some(date(1)));
        assert_eq!(b.end_date, None);
    }

    #[test]
    fn add_session_rejects_reversed_range() {
        let mut b = book(300);
        let err = add_session(&mut b, new_session(1, 100, 50)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        // The ledger must be untouched on rejection.
        assert!(b.reading_sessions.is_empty());
        assert_eq!(b.progress, 0);
    }

    #[test]
    fn add_session_rejects_end_page_past_total() {
        let mut b = book(300);
        let err = add_session(&mut b, new_session(1, 1, 301)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(b.reading_sessions.is_empty());
    }

    #[test]
    fn add_session_allows_any_end_page_when_total_unknown() {
        let mut b = book(0);
        add_session(&mut b, new_session(1, 1, 500)).unwrap();
        assert_eq!(b.progress, 0);
        assert_eq!(b.status, ReadingStatus::ToRead);
    }

    #[test]
    fn start_date_is_never_overwritten() {
        let mut b = book(300);
        add_session(&mut b, new_session(5, 1, 50)).unwrap();
        add_session(&mut b, new_session(2, 51, 100)).unwrap();
        // Earliest-added, not earliest-dated.
        assert_eq!(b.start_date, Some(date(5)));
    }

    #[test]
    fn completing_session_sets_end_date() {
        let mut b = book(100);
        add_session(&mut b, new_session(1, 1, 60)).unwrap();
        assert_eq!(b.end_date, None);

        add_session(&mut b, new_session(3, 61, 100)).unwrap();
        assert_eq!(b.status, ReadingStatus::Completed);
        assert_eq!(b.end_date, Some(date(3)));
    }

    #[test]
    fn removing_the_completing_session_clears_end_date() {
        let mut b = book(100);
        add_session(&mut b, new_session(1, 1, 60)).unwrap();
        add_session(&mut b, new_session(3, 61, 100)).unwrap();
        let completing_id = b.reading_sessions[1].id.clone();

        remove_session(&mut b, &completing_id);

        assert_eq!(b.progress, 60);
        assert_eq!(b.status, ReadingStatus::Reading);
        assert_eq!(b.end_date, None);
        // Start date survives removal.
        assert_eq!(b.start_date, Some(date(1)));
    }

    #[test]
    fn removing_last_session_resets_to_to_read() {
        let mut b = book(100);
        add_session(&mut b, new_session(1, 1, 100)).unwrap();
        let id = b.reading_sessions[0].id.clone();

        remove_session(&mut b, &id);

        assert_eq!(b.progress, 0);
        assert_eq!(b.status, ReadingStatus::ToRead);
        assert_eq!(b.current_page, 0);
        assert_eq!(b.end_date, None);
    }

    #[test]
    fn remove_unknown_session_is_a_noop() {
        let mut b = book(100);
        add_session(&mut b, new_session(1, 1, 100)).unwrap();

        remove_session(&mut b, "no-such-id");

        assert_eq!(b.reading_sessions.len(), 1);
        assert_eq!(b.progress, 100);
        assert_eq!(b.end_date, Some(date(1)));
    }

    #[test]
    fn remove_keeps_end_date_while_still_complete() {
        let mut b = book(100);
        add_session(&mut b, new_session(1, 1, 100)).unwrap();
        add_session(&mut b, new_session(4, 90, 100)).unwrap();
        let second_id = b.reading_sessions[1].id.clone();
        assert_eq!(b.end_date, Some(date(4)));

        remove_session(&mut b, &second_id);

        // Still at 100% through the first session; the prior end date stays.
        assert_eq!(b.progress, 100);
        assert_eq!(b.end_date, Some(date(4)));
    }

    #[test]
    fn replace_sessions_sets_end_date_from_latest_session() {
        let mut b = book(100);
        let sessions = vec![
            Session {
                id: "a".to_string(),
                date: date(8),
                start_page: 51,
                end_page: 100,
                notes: None,
            },
            Session {
                id: "b".to_string(),
                date: date(2),
                start_page: 1,
                end_page: 50,
                notes: None,
            },
        ];

        replace_sessions(&mut b, sessions).unwrap();

        assert_eq!(b.progress, 100);
        // Latest by date, not by position.
        assert_eq!(b.end_date, Some(date(8)));
    }

    #[test]
    fn replace_sessions_clears_end_date_below_100() {
        let mut b = book(100);
        add_session(&mut b, new_session(1, 1, 100)).unwrap();
        assert_eq!(b.end_date, Some(date(1)));

        replace_sessions(
            &mut b,
            vec![Session {
                id: "a".to_string(),
                date: date(2),
                start_page: 1,
                end_page: 40,
                notes: None,
            }],
        )
        .unwrap();

        assert_eq!(b.progress, 40);
        assert_eq!(b.end_date, None);
    }

    #[test]
    fn replace_sessions_validates_every_entry() {
        let mut b = book(100);
        let err = replace_sessions(
            &mut b,
            vec![Session {
                id: "a".to_string(),
                date: date(2),
                start_page: 0,
                end_page: 40,
                notes: None,
            }],
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn replace_sessions_fills_missing_ids() {
        let mut b = book(100);
        replace_sessions(
            &mut b,
            vec![Session {
                id: String::new(),
                date: date(2),
                start_page: 1,
                end_page: 40,
                notes: None,
            }],
        )
        .unwrap();
        assert!(!b.reading_sessions[0].id.is_empty());
    }

    #[test]
    fn rederive_after_page_count_correction() {
        let mut b = book(300);
        add_session(&mut b, new_session(1, 1, 150)).unwrap();

        // Page count corrected down; the same ledger now completes it.
        b.total_pages = 150;
        rederive(&mut b);
        assert_eq!(b.progress, 100);
        assert_eq!(b.status, ReadingStatus::Completed);
        assert_eq!(b.end_date, Some(date(1)));

        // And back up; completion is undone.
        b.total_pages = 600;
        rederive(&mut b);
        assert_eq!(b.progress, 25);
        assert_eq!(b.status, ReadingStatus::Reading);
        assert_eq!(b.end_date, None);
    }
}
