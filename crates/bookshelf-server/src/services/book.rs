//! Book service.
//!
//! Books carry a required reference to an author. Creation persists the
//! reference as given; update first resolves the referenced author and
//! persists the resolved id, so only updates guard against dangling
//! references.

use std::sync::Arc;

use bookshelf_core::params::{AuthorData, BookData, BookRequest, DATE_FORMAT};
use bookshelf_core::response::CustomError;
use bookshelf_core::validate::Validate;
use bookshelf_store::{AuthorRepository, BookRepository, BookRow, NewBook};

/// CRUD orchestration for books.
pub struct BookService {
    books: Arc<dyn BookRepository>,
    authors: Arc<dyn AuthorRepository>,
}

impl BookService {
    pub fn new(books: Arc<dyn BookRepository>, authors: Arc<dyn AuthorRepository>) -> Self {
        Self { books, authors }
    }

    pub async fn find_detail(&self, id: i64) -> Result<BookData, CustomError> {
        let book = self
            .books
            .find_by_id(id)
            .await
            .map_err(|_| CustomError::not_found())?;

        Ok(book_data(&book))
    }

    pub async fn find_all(&self) -> Result<Vec<BookData>, CustomError> {
        let books = self
            .books
            .list()
            .await
            .map_err(|_| CustomError::bad_request())?;

        Ok(books.iter().map(book_data).collect())
    }

    pub async fn create(&self, request: &BookRequest) -> Result<(), CustomError> {
        request.validate()?;

        let book = NewBook {
            title: request.title.clone(),
            isbn: request.isbn.clone(),
            author_id: request.author_id,
        };
        self.books.create(&book).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create book");
            CustomError::bad_request()
        })?;

        Ok(())
    }

    pub async fn update(&self, id: i64, request: &BookRequest) -> Result<BookData, CustomError> {
        request.validate()?;

        // Resolve the referenced author before touching the book; a
        // dangling reference aborts the update.
        let author = self
            .authors
            .find_by_id(request.author_id)
            .await
            .map_err(|_| CustomError::bad_request())?;

        let book = NewBook {
            title: request.title.clone(),
            isbn: request.isbn.clone(),
            author_id: author.id,
        };
        self.books.update(id, &book).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to update book");
            CustomError::bad_request()
        })?;

        Ok(BookData {
            id,
            title: book.title,
            isbn: book.isbn,
            author: AuthorData {
                id: author.id,
                name: author.name,
                birthdate: author.birthdate.format(DATE_FORMAT).to_string(),
            },
        })
    }

    pub async fn delete(&self, id: i64) -> Result<(), CustomError> {
        self.books
            .delete(id)
            .await
            .map_err(|_| CustomError::not_found())?;

        Ok(())
    }
}

/// Map a stored row to the wire shape with the embedded author.
///
/// A dangling reference leaves the author columns NULL; the embedded
/// object then carries the raw id with empty name and birthdate.
fn book_data(book: &BookRow) -> BookData {
    BookData {
        id: book.id,
        title: book.title.clone(),
        isbn: book.isbn.clone(),
        author: AuthorData {
            id: book.author_id,
            name: book.author_name.clone().unwrap_or_default(),
            birthdate: book
                .author_birthdate
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::response::ErrorInfo;
    use bookshelf_store::{InMemoryAuthorRepository, InMemoryBookRepository, NewAuthor};
    use chrono::NaiveDate;

    async fn service_with_author() -> (BookService, Arc<InMemoryBookRepository>, i64) {
        let authors = Arc::new(InMemoryAuthorRepository::new());
        let author_id = authors
            .create(&NewAuthor {
                name: "Ursula K. Le Guin".to_string(),
                birthdate: NaiveDate::parse_from_str("1929-10-21", "%Y-%m-%d").unwrap(),
            })
            .await
            .unwrap();
        let books = Arc::new(InMemoryBookRepository::new(authors.clone()));
        (BookService::new(books.clone(), authors), books, author_id)
    }

    fn request(title: &str, isbn: &str, author_id: i64) -> BookRequest {
        BookRequest {
            title: title.to_string(),
            isbn: isbn.to_string(),
            author_id,
        }
    }

    #[tokio::test]
    async fn create_and_read_embeds_author() {
        let (service, _, author_id) = service_with_author().await;
        service
            .create(&request("The Dispossessed", "978-0-06-051275-5", author_id))
            .await
            .unwrap();

        let book = service.find_detail(1).await.unwrap();
        assert_eq!(book.title, "The Dispossessed");
        assert_eq!(book.author.id, author_id);
        assert_eq!(book.author.name, "Ursula K. Le Guin");
        assert_eq!(book.author.birthdate, "1929-10-21");
    }

    #[tokio::test]
    async fn create_accepts_dangling_author_reference() {
        let (service, _, _) = service_with_author().await;
        // Creation does not resolve the reference.
        service.create(&request("Orphan", "isbn-1", 99)).await.unwrap();

        let book = service.find_detail(1).await.unwrap();
        assert_eq!(book.author.id, 99);
        assert!(book.author.name.is_empty());
    }

    #[tokio::test]
    async fn update_with_missing_author_fails_and_writes_nothing() {
        let (service, books, author_id) = service_with_author().await;
        service
            .create(&request("The Dispossessed", "isbn-1", author_id))
            .await
            .unwrap();

        let err = service
            .update(1, &request("Renamed", "isbn-1", 99))
            .await
            .unwrap_err();
        assert_eq!(err.status_code, 400);
        assert_eq!(err.message, "BAD REQUEST");

        let untouched = books.find_by_id(1).await.unwrap();
        assert_eq!(untouched.title, "The Dispossessed");
        assert_eq!(untouched.author_id, author_id);
    }

    #[tokio::test]
    async fn update_persists_resolved_author() {
        let (service, books, author_id) = service_with_author().await;
        service
            .create(&request("The Dispossessed", "isbn-1", author_id))
            .await
            .unwrap();

        let data = service
            .update(1, &request("The Left Hand of Darkness", "isbn-2", author_id))
            .await
            .unwrap();
        assert_eq!(data.title, "The Left Hand of Darkness");
        assert_eq!(data.author.name, "Ursula K. Le Guin");
        assert_eq!(books.find_by_id(1).await.unwrap().isbn, "isbn-2");
    }

    #[tokio::test]
    async fn validation_reports_title_and_reference() {
        let (service, _, _) = service_with_author().await;
        let err = service.create(&BookRequest::default()).await.unwrap_err();
        assert_eq!(
            err.errors,
            Some(ErrorInfo::Fields(vec![
                "error Title on tag required".to_string(),
                "error AuthorID on tag required".to_string(),
            ]))
        );
    }

    #[tokio::test]
    async fn missing_book_maps_to_not_found() {
        let (service, _, _) = service_with_author().await;
        assert_eq!(service.find_detail(5).await.unwrap_err().message, "NOT FOUND");
        assert_eq!(service.delete(5).await.unwrap_err().message, "NOT FOUND");
    }
}
