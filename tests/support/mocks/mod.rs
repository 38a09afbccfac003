// tests/support/mocks/mod.rs
//! In-memory doubles for the stores an editing session talks to.
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod category_repo;
pub mod images;
pub mod time;

pub use article_repos::{InMemoryArticles, WriteHook};
pub use category_repo::InMemoryCategories;
pub use images::InMemoryImages;
pub use time::{FixedClock, fixed_now};
