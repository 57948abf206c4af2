use serde::Serialize;

use crate::error::SpecError;

/// One page of results plus the window it was cut from.
///
/// `total_pages` is `ceil(total_items / page_size)`. This is the shape the
/// evaluator's (page, count) output feeds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pagination<T> {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub items: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn new(
        current_page: usize,
        page_size: usize,
        total_items: usize,
        items: Vec<T>,
    ) -> Result<Self, SpecError> {
        if page_size == 0 {
            return Err(SpecError::InvalidPageSize(page_size));
        }
        if current_page == 0 {
            return Err(SpecError::InvalidPageIndex(current_page));
        }
        Ok(Self {
            current_page,
            page_size,
            total_items,
            total_pages: total_items.div_ceil(page_size),
            items,
        })
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }
}
