//! Pagination helpers for listing endpoints

use serde::{Deserialize, Serialize};

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

/// Page/limit query parameters with the listing defaults used by the
/// hotel catalogue (page 1, 10 items).
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u32,

    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl PageQuery {
    /// Number of records to skip before this page
    pub fn offset(&self) -> u64 {
        let page = self.page.max(1);
        u64::from(page - 1) * u64::from(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_skips_previous_pages() {
        let query = PageQuery { page: 3, limit: 10 };
        assert_eq!(query.offset(), 20);
    }

    #[test]
    fn page_zero_is_clamped() {
        let query = PageQuery { page: 0, limit: 10 };
        assert_eq!(query.offset(), 0);
    }
}
