//! Domain entities and the pure helpers derived from them.

mod format;
mod hotel;
mod reservation;
mod search;
mod stay;
mod user;

pub use format::{
    PLACEHOLDER_IMAGES, amenity_label, format_date, format_date_str, format_price, hotel_image,
    initials, min_check_in_date, min_check_out_date, truncate_text,
};
pub use hotel::{
    Availability, DEFAULT_CHECK_IN_TIME, DEFAULT_CHECK_OUT_TIME, Hotel, HotelDraft, RatingBadge,
};
pub use reservation::{NewReservation, Reservation};
pub use search::{DEFAULT_PAGE_SIZE, SortOption, page_offset, sort_hotels, total_pages};
pub use stay::{ReservationStatus, StatusSeverity, nights_between, total_price};
pub use user::{Credentials, Role, Session, User};
