//! Form validation rules. Every check runs before any network call.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use url::Url;

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MIN_LOGIN_PASSWORD_LENGTH: usize = 4;
pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("Invalid regex"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s\-+()]+$").expect("Invalid regex"));

/// Outcome of a single rule: `Err` carries the message to show.
pub type Check = Result<(), String>;

pub fn validate_required(value: &str, field: &str) -> Check {
    if value.trim().is_empty() {
        return Err(format!("{field} is required"));
    }
    Ok(())
}

pub fn validate_min_length(value: &str, field: &str, min: usize) -> Check {
    if value.chars().count() < min {
        return Err(format!("{field} must be at least {min} characters"));
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Check {
    validate_required(username, "Username")?;
    validate_min_length(username, "Username", MIN_USERNAME_LENGTH)?;
    if !USERNAME_RE.is_match(username) {
        return Err("Username can only contain letters, numbers, and underscores".to_string());
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Check {
    validate_required(password, "Password")?;
    validate_min_length(password, "Password", MIN_PASSWORD_LENGTH)
}

/// Optional; when present must look like `local@domain.tld`.
pub fn validate_email(email: &str) -> Check {
    let email = email.trim();
    if !email.is_empty() && !EMAIL_RE.is_match(email) {
        return Err("Please enter a valid email address".to_string());
    }
    Ok(())
}

/// Optional; digits, spaces, `-`, `+` and parentheses only.
pub fn validate_phone(phone: &str) -> Check {
    let phone = phone.trim();
    if !phone.is_empty() && !PHONE_RE.is_match(phone) {
        return Err("Please enter a valid phone number".to_string());
    }
    Ok(())
}

/// Optional; when present must parse as an absolute URL.
pub fn validate_url(url: &str) -> Check {
    let url = url.trim();
    if url.is_empty() {
        return Ok(());
    }
    Url::parse(url)
        .map(|_| ())
        .map_err(|_| "Please enter a valid URL".to_string())
}

pub fn validate_rating(raw: &str) -> Check {
    let rating: f64 = raw
        .trim()
        .parse()
        .map_err(|_| "Rating must be a number".to_string())?;
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}"
        ));
    }
    Ok(())
}

pub fn validate_price(raw: &str) -> Check {
    let price: f64 = raw
        .trim()
        .parse()
        .map_err(|_| "Price must be a number".to_string())?;
    if price < 0.0 {
        return Err("Price cannot be negative".to_string());
    }
    Ok(())
}

/// Both dates present, check-in not before today, check-out after check-in.
pub fn validate_date_range(
    today: NaiveDate,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
) -> Check {
    let (Some(check_in), Some(check_out)) = (check_in, check_out) else {
        return Err("Both check-in and check-out dates are required".to_string());
    };
    if check_in < today {
        return Err("Check-in date cannot be in the past".to_string());
    }
    if check_out <= check_in {
        return Err("Check-out date must be after check-in date".to_string());
    }
    Ok(())
}

/// Collect the messages of every failed rule.
pub fn combine<I>(checks: I) -> Result<(), Vec<String>>
where
    I: IntoIterator<Item = Check>,
{
    let errors: Vec<String> = checks.into_iter().filter_map(Result::err).collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_username_rules() {
        assert!(validate_username("ana_01").is_ok());
        assert_eq!(validate_username("").unwrap_err(), "Username is required");
        assert_eq!(
            validate_username("ab").unwrap_err(),
            "Username must be at least 3 characters"
        );
        assert!(validate_username("ana maria").is_err());
        assert!(validate_username("ana-maria").is_err());
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("secret").is_ok());
        assert!(validate_password("12345").is_err());
        assert!(validate_password("   ").is_err());
    }

    #[test]
    fn test_optional_contact_fields() {
        assert!(validate_email("").is_ok());
        assert!(validate_email("info@oceanview.com").is_ok());
        assert!(validate_email("info@oceanview").is_err());
        assert!(validate_email("a b@c.com").is_err());
        assert!(validate_email("ana@.example.com").is_ok());
        assert!(validate_email("a@b@c.com").is_err());

        assert!(validate_phone("+1-305-555-0200").is_ok());
        assert!(validate_phone("(305) 555 0200").is_ok());
        assert!(validate_phone("call me").is_err());
    }

    #[test]
    fn test_url_accepts_any_absolute_scheme() {
        assert!(validate_url("").is_ok());
        assert!(validate_url("https://images.example.com/a.jpg").is_ok());
        assert!(validate_url("ftp://files.example.com").is_ok());
        assert!(validate_url("images/a.jpg").is_err());
        assert!(validate_url("not a url").is_err());
    }

    #[test]
    fn test_rating_and_price() {
        assert!(validate_rating("4.5").is_ok());
        assert!(validate_rating("5.1").is_err());
        assert_eq!(validate_rating("great").unwrap_err(), "Rating must be a number");
        assert!(validate_price("0").is_ok());
        assert_eq!(validate_price("-1").unwrap_err(), "Price cannot be negative");
    }

    #[test]
    fn test_date_range() {
        let today = date("2024-06-10");
        assert!(validate_date_range(today, Some(date("2024-06-10")), Some(date("2024-06-11"))).is_ok());
        assert!(validate_date_range(today, None, Some(date("2024-06-11"))).is_err());
        assert_eq!(
            validate_date_range(today, Some(date("2024-06-09")), Some(date("2024-06-11"))).unwrap_err(),
            "Check-in date cannot be in the past"
        );
        assert_eq!(
            validate_date_range(today, Some(date("2024-06-12")), Some(date("2024-06-12"))).unwrap_err(),
            "Check-out date must be after check-in date"
        );
    }

    #[test]
    fn test_combine_collects_all_failures() {
        let result = combine([
            validate_required("", "Name"),
            validate_required("Main St", "Address"),
            validate_required("", "City"),
        ]);
        assert_eq!(
            result.unwrap_err(),
            vec!["Name is required".to_string(), "City is required".to_string()]
        );
        assert!(combine([validate_required("x", "Name")]).is_ok());
    }
}
