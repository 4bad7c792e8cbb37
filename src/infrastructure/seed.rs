//! Demo data for a fresh installation

use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::domain::ledger::{self, NewSession};
use crate::domain::{BookRepository, DomainError};
use crate::infrastructure::SeaOrmBookRepository;
use crate::models::book::{Book, Entity as BookEntity};

fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn session(y: i32, m: u32, d: u32, start_page: i32, end_page: i32, notes: &str) -> NewSession {
    NewSession {
        date: date(y, m, d),
        start_page,
        end_page,
        notes: if notes.is_empty() {
            None
        } else {
            Some(notes.to_string())
        },
    }
}

pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DomainError> {
    // Seed only into an empty collection
    let existing = BookEntity::find().count(db).await?;
    if existing > 0 {
        tracing::info!("Skipping demo seed, {} books already present", existing);
        return Ok(());
    }

    let repo = SeaOrmBookRepository::new(db.clone());

    // A book mid-read, with a few sessions on the ledger
    let mut midnight = Book::new(
        "The Midnight Library".to_string(),
        "Matt Haig".to_string(),
        288,
    );
    midnight.notes = "Fascinating concept about infinite lives.".to_string();
    ledger::add_session(
        &mut midnight,
        session(2024, 6, 1, 1, 50, "Great opening, really drew me in"),
    )?;
    ledger::add_session(
        &mut midnight,
        session(2024, 6, 3, 51, 120, "The concept is becoming clearer"),
    )?;
    ledger::add_session(
        &mut midnight,
        session(2024, 6, 5, 121, 216, "Really enjoying the different life scenarios"),
    )?;
    repo.create(midnight).await?;

    // A finished, rated book
    let mut atomic = Book::new("Atomic Habits".to_string(), "James Clear".to_string(), 320);
    atomic.rating = 5;
    atomic.notes = "Practical and very re-readable.".to_string();
    ledger::add_session(&mut atomic, session(2024, 4, 10, 1, 140, ""))?;
    ledger::add_session(
        &mut atomic,
        session(2024, 4, 18, 141, 320, "The habit stacking chapter is the keeper"),
    )?;
    repo.create(atomic).await?;

    // A book still on the pile
    let dune = Book::new("Dune".to_string(), "Frank Herbert".to_string(), 412);
    repo.create(dune).await?;

    Ok(())
}
