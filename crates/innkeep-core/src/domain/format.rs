//! Display formatting for prices, dates and hotel cards.

use chrono::NaiveDate;

use super::reservation::parse_flexible_date;

pub const PLACEHOLDER_IMAGES: [&str; 6] = [
    "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=800",
    "https://images.unsplash.com/photo-1582719508461-905c673771fd?w=800",
    "https://images.unsplash.com/photo-1520250497591-112f2f40a3f4?w=800",
    "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb?w=800",
    "https://images.unsplash.com/photo-1571896349842-33c89424de2d?w=800",
    "https://images.unsplash.com/photo-1551882547-ff40c63fe5fa?w=800",
];

/// Whole US dollars with thousands separators, e.g. `$1,299`.
pub fn format_price(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}")
}

/// `June 1, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Like [`format_date`], returning the input untouched when it does not parse.
pub fn format_date_str(raw: &str) -> String {
    parse_flexible_date(raw)
        .map(format_date)
        .unwrap_or_else(|| raw.to_string())
}

pub fn min_check_in_date(today: NaiveDate) -> NaiveDate {
    today
}

/// The day after check-in, or today when no check-in is chosen yet.
pub fn min_check_out_date(check_in: Option<NaiveDate>, today: NaiveDate) -> NaiveDate {
    check_in
        .and_then(|date| date.succ_opt())
        .unwrap_or_else(|| min_check_in_date(today))
}

pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let head: String = text.chars().take(max_len).collect();
    format!("{head}...")
}

pub fn initials(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

/// The hotel's own first image, else a placeholder picked from the id.
pub fn hotel_image(hotel_id: &str, images: &[String]) -> String {
    if let Some(first) = images.first() {
        return first.clone();
    }
    let tail_start = hotel_id
        .char_indices()
        .rev()
        .nth(1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    let digits: String = hotel_id[tail_start..]
        .chars()
        .take_while(char::is_ascii_hexdigit)
        .collect();
    let index = usize::from_str_radix(&digits, 16).unwrap_or(0);
    PLACEHOLDER_IMAGES[index % PLACEHOLDER_IMAGES.len()].to_string()
}

pub fn amenity_label(tag: &str) -> String {
    match tag.to_lowercase().as_str() {
        "wifi" => "Free WiFi".to_string(),
        "pool" => "Pool".to_string(),
        "restaurant" => "Restaurant".to_string(),
        "gym" => "Gym".to_string(),
        "spa" => "Spa".to_string(),
        "parking" => "Parking".to_string(),
        "air_conditioning" => "Air Conditioning".to_string(),
        "bar" => "Bar".to_string(),
        "room_service" => "Room Service".to_string(),
        "laundry" => "Laundry".to_string(),
        _ => tag.to_string(),
    }
}
