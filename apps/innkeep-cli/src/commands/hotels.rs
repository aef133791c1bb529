use innkeep_core::domain::{
    Hotel, SortOption, amenity_label, format_price, hotel_image, truncate_text,
};
use innkeep_core::ports::HotelApi;
use innkeep_core::validation::validate_date_range;
use innkeep_core::views::{HotelDetailView, HotelState, SearchView};

use super::{announce, parse_date, refuse, today};
use crate::state::AppState;

const DESCRIPTION_PREVIEW: usize = 60;

pub async fn search(
    state: &AppState,
    query: &str,
    page: u32,
    sort: SortOption,
) -> anyhow::Result<()> {
    let mut view = SearchView::new(state.api.clone(), query, state.page_size)
        .with_page(page)
        .with_sort(sort);
    view.load().await;

    if let Some(error) = view.error() {
        anyhow::bail!("{error}");
    }
    if view.is_empty() {
        println!("No hotels found. Try a different search.");
        return Ok(());
    }
    for hotel in view.hotels() {
        print_summary(hotel);
    }
    if view.shows_pagination() {
        println!(
            "\nPage {} of {} (sorted by {})",
            view.page(),
            view.total_pages(),
            view.sort().as_str()
        );
    }
    Ok(())
}

fn print_summary(hotel: &Hotel) {
    println!(
        "{:<10} {:<32} {:>8}/night  {:.1}*  {}",
        hotel.id,
        truncate_text(&hotel.name, 32),
        format_price(hotel.price_per_night),
        hotel.rating,
        hotel.location()
    );
    if !hotel.description.is_empty() {
        println!("{:>11}{}", "", truncate_text(&hotel.description, DESCRIPTION_PREVIEW));
    }
}

pub async fn show(state: &AppState, id: &str) -> anyhow::Result<()> {
    let mut view = HotelDetailView::new(state.api.clone(), state.api.clone(), id);
    view.load().await;

    let hotel = match view.state() {
        HotelState::Loaded(hotel) => hotel,
        HotelState::NotFound { message } => anyhow::bail!("{message}"),
        HotelState::Loading => anyhow::bail!("Hotel is still loading"),
    };

    println!("{}", hotel.name);
    println!("{}", hotel.location());
    if !hotel.address.is_empty() {
        println!("{}", hotel.address);
    }
    println!();
    if !hotel.description.is_empty() {
        println!("{}\n", hotel.description);
    }
    println!("Price:      {} / night", format_price(hotel.price_per_night));
    println!("Rating:     {:.1}", hotel.rating);
    println!("Rooms left: {}", hotel.available_rooms);
    println!("Check-in:   {}", hotel.check_in_clock());
    println!("Check-out:  {}", hotel.check_out_clock());
    if !hotel.phone.is_empty() {
        println!("Phone:      {}", hotel.phone);
    }
    if !hotel.email.is_empty() {
        println!("Email:      {}", hotel.email);
    }
    if !hotel.amenities.is_empty() {
        let labels: Vec<String> = hotel.amenities.iter().map(|a| amenity_label(a)).collect();
        println!("Amenities:  {}", labels.join(", "));
    }
    println!("Image:      {}", hotel_image(&hotel.id, &hotel.images));
    Ok(())
}

pub async fn availability(
    state: &AppState,
    hotel_ids: &[String],
    check_in: &str,
    check_out: &str,
) -> anyhow::Result<()> {
    let (check_in, check_out) = (parse_date(check_in)?, parse_date(check_out)?);
    validate_date_range(today(), Some(check_in), Some(check_out)).map_err(anyhow::Error::msg)?;

    let availability = state
        .api
        .check_availability(hotel_ids, check_in, check_out)
        .await?;
    for id in hotel_ids {
        let answer = match availability.get(id) {
            Some(true) => "available",
            Some(false) => "sold out",
            None => "unknown",
        };
        println!("{id:<10} {answer}");
    }
    Ok(())
}

pub async fn book(
    state: &AppState,
    id: &str,
    check_in: &str,
    check_out: &str,
) -> anyhow::Result<()> {
    let (check_in, check_out) = (parse_date(check_in)?, parse_date(check_out)?);
    let mut view = HotelDetailView::new(state.api.clone(), state.api.clone(), id);
    view.load().await;
    if let HotelState::NotFound { message } = view.state() {
        anyhow::bail!("{message}");
    }
    if let Some(route) = view.open_booking(&state.session) {
        return Err(refuse(route));
    }

    view.select_dates(Some(check_in), Some(check_out));
    if let (Some(hotel), Some(nights)) = (view.hotel(), view.booking().nights()) {
        let total = view.booking().total_price(hotel.price_per_night).unwrap_or_default();
        println!(
            "{}: {nights} night(s), {} total",
            hotel.name,
            format_price(total)
        );
    }

    let booked = view.submit_booking().await;
    if let Some(notification) = view.take_notification() {
        announce(&notification);
    }
    if !booked {
        anyhow::bail!("Reservation was not created");
    }
    Ok(())
}
