use std::sync::Arc;

use crate::domain::{Hotel, SortOption, page_offset, sort_hotels, total_pages};
use crate::ports::HotelApi;

const SEARCH_FALLBACK: &str = "Could not load hotels. Please try again later.";

/// Search results page: query, 1-based page, client-side sort.
pub struct SearchView {
    api: Arc<dyn HotelApi>,
    query: String,
    page: u32,
    page_size: u32,
    sort: SortOption,
    hotels: Vec<Hotel>,
    total_pages: u32,
    loading: bool,
    error: Option<String>,
}

impl SearchView {
    pub fn new(api: Arc<dyn HotelApi>, query: impl Into<String>, page_size: u32) -> Self {
        Self {
            api,
            query: query.into(),
            page: 1,
            page_size: page_size.max(1),
            sort: SortOption::Relevance,
            hotels: Vec::new(),
            total_pages: 1,
            loading: false,
            error: None,
        }
    }

    /// Start on `page` instead of the first one.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Nothing found, and nothing went wrong.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.hotels.is_empty()
    }

    pub fn shows_pagination(&self) -> bool {
        !self.loading && !self.hotels.is_empty() && self.total_pages > 1
    }

    /// Fetch the current page. Failure clears the list.
    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;
        let offset = page_offset(self.page, self.page_size);

        match self.api.search(&self.query, offset, self.page_size).await {
            Ok(mut hotels) => {
                sort_hotels(&mut hotels, self.sort);
                self.total_pages = total_pages(hotels.len(), self.page_size);
                self.hotels = hotels;
            }
            Err(e) => {
                tracing::warn!(error = %e, query = %self.query, "Hotel search failed");
                self.error = Some(SEARCH_FALLBACK.to_string());
                self.hotels.clear();
            }
        }
        self.loading = false;
    }

    /// New query; always back to page 1.
    pub async fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
        self.load().await;
    }

    pub async fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
        self.load().await;
    }

    pub async fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
        self.load().await;
    }
}
