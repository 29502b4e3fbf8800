//! Entity services: validate → repository call → map to response.
//!
//! Each service owns its repository contracts and collapses every
//! repository failure into one of the normalized error kinds; the
//! routes above never see a raw store error.

pub mod author;
pub mod book;
pub mod user;

pub use author::AuthorService;
pub use book::BookService;
pub use user::UserService;
