// src/application/dto/mod.rs
pub mod articles;
pub mod auth;
pub mod categories;
pub mod editor;
pub mod flash;
pub mod pagination;

pub use articles::{ArticleDto, ArticleListDto};
pub use auth::AuthenticatedUser;
pub use categories::CategoryDto;
pub use editor::{EditorSessionDto, FieldErrorDto, ValidationErrorsDto};
pub use flash::{ARTICLES_INDEX, BannerStyle, Confirmation};
pub use pagination::OffsetPage;
