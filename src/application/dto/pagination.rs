// src/application/dto/pagination.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct OffsetPage<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub last_page: u32,
}

impl<T> OffsetPage<T> {
    pub fn new(items: Vec<T>, page: u32, per_page: u32, total: u64) -> Self {
        let per_page = per_page.max(1);
        let pages = total.div_ceil(u64::from(per_page)).max(1);
        Self {
            items,
            page,
            per_page,
            total,
            last_page: u32::try_from(pages).unwrap_or(u32::MAX),
        }
    }

    pub fn has_more(&self) -> bool {
        self.page < self.last_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_page_rounds_up_and_is_at_least_one() {
        let page: OffsetPage<()> = OffsetPage::new(Vec::new(), 1, 5, 0);
        assert_eq!(page.last_page, 1);
        assert!(!page.has_more());

        let page: OffsetPage<()> = OffsetPage::new(Vec::new(), 2, 5, 11);
        assert_eq!(page.last_page, 3);
        assert!(page.has_more());
    }
}
