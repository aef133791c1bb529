use std::str::FromStr;

use super::hotel::Hotel;

pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Client-side ordering applied to a page of search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// Backend order.
    #[default]
    Relevance,
    PriceLow,
    PriceHigh,
    Rating,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
            SortOption::Rating => "rating",
        }
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(SortOption::Relevance),
            "price-low" => Ok(SortOption::PriceLow),
            "price-high" => Ok(SortOption::PriceHigh),
            "rating" => Ok(SortOption::Rating),
            other => Err(format!("unknown sort option: {other}")),
        }
    }
}

/// Reorder in place. `sort_by` is stable, so equal keys keep backend order.
pub fn sort_hotels(hotels: &mut [Hotel], sort: SortOption) {
    match sort {
        SortOption::Relevance => {}
        SortOption::PriceLow => {
            hotels.sort_by(|a, b| a.price_per_night.total_cmp(&b.price_per_night))
        }
        SortOption::PriceHigh => {
            hotels.sort_by(|a, b| b.price_per_night.total_cmp(&a.price_per_night))
        }
        SortOption::Rating => hotels.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
}

/// Page count from the size of the returned page; at least one.
///
/// The backend sends no total, so this only approximates the real count.
pub fn total_pages(returned: usize, page_size: u32) -> u32 {
    let page_size = page_size.max(1) as usize;
    (returned.div_ceil(page_size) as u32).max(1)
}

/// Offset of a 1-based page, clamped at `u32::MAX`.
pub fn page_offset(page: u32, page_size: u32) -> u32 {
    page.saturating_sub(1).saturating_mul(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel(id: &str, price: f64, rating: f64) -> Hotel {
        Hotel {
            id: id.to_string(),
            price_per_night: price,
            rating,
            ..Hotel::default()
        }
    }

    fn ids(hotels: &[Hotel]) -> Vec<&str> {
        hotels.iter().map(|h| h.id.as_str()).collect()
    }

    #[test]
    fn test_price_ascending() {
        let mut hotels = vec![hotel("a", 300.0, 0.0), hotel("b", 100.0, 0.0), hotel("c", 200.0, 0.0)];
        sort_hotels(&mut hotels, SortOption::PriceLow);
        let prices: Vec<f64> = hotels.iter().map(|h| h.price_per_night).collect();
        assert_eq!(prices, vec![100.0, 200.0, 300.0]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut hotels = vec![
            hotel("first", 100.0, 4.0),
            hotel("cheap", 50.0, 4.0),
            hotel("second", 100.0, 4.0),
        ];
        sort_hotels(&mut hotels, SortOption::PriceLow);
        assert_eq!(ids(&hotels), vec!["cheap", "first", "second"]);

        sort_hotels(&mut hotels, SortOption::Rating);
        assert_eq!(ids(&hotels), vec!["cheap", "first", "second"]);
    }

    #[test]
    fn test_price_descending_and_rating() {
        let mut hotels = vec![hotel("a", 100.0, 3.0), hotel("b", 300.0, 4.5), hotel("c", 200.0, 5.0)];
        sort_hotels(&mut hotels, SortOption::PriceHigh);
        assert_eq!(ids(&hotels), vec!["b", "c", "a"]);

        sort_hotels(&mut hotels, SortOption::Rating);
        assert_eq!(ids(&hotels), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_relevance_keeps_backend_order() {
        let mut hotels = vec![hotel("z", 300.0, 1.0), hotel("a", 100.0, 5.0)];
        sort_hotels(&mut hotels, SortOption::Relevance);
        assert_eq!(ids(&hotels), vec!["z", "a"]);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 12), 1);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1, 12), 0);
        assert_eq!(page_offset(3, 12), 24);
        assert_eq!(page_offset(0, 12), 0);
        assert_eq!(page_offset(400_000_000, 12), u32::MAX);
    }

    #[test]
    fn test_sort_option_parse() {
        assert_eq!("price-high".parse::<SortOption>(), Ok(SortOption::PriceHigh));
        assert!("cheapest".parse::<SortOption>().is_err());
    }
}
