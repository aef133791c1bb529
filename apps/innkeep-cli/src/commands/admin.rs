//! Administrator commands: dashboard, hotel mutation and the microservice console.

use clap::Args;

use innkeep_core::domain::{RatingBadge, format_price};
use innkeep_core::ports::AdminApi;
use innkeep_core::views::{DashboardView, DeleteTarget, HotelFormView};

use super::{announce, field_errors, follow, refuse};
use crate::state::AppState;

/// Hotel fields accepted by `create-hotel` and `update-hotel`. Omitted
/// fields keep their current (or default) value.
#[derive(Debug, Default, Args)]
pub struct HotelArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// Price per night
    #[arg(long)]
    pub price: Option<String>,
    /// Rating between 0 and 5
    #[arg(long)]
    pub rating: Option<String>,
    /// Available rooms
    #[arg(long)]
    pub rooms: Option<String>,
    /// Check-in time (HH:MM)
    #[arg(long)]
    pub check_in_time: Option<String>,
    /// Check-out time (HH:MM)
    #[arg(long)]
    pub check_out_time: Option<String>,
    /// Amenity tag to add (repeatable)
    #[arg(long = "amenity")]
    pub amenities: Vec<String>,
    /// Amenity tag to remove (repeatable)
    #[arg(long = "drop-amenity")]
    pub drop_amenities: Vec<String>,
    /// Image URL to add (repeatable)
    #[arg(long = "image")]
    pub images: Vec<String>,
    /// Image URL to remove (repeatable)
    #[arg(long = "drop-image")]
    pub drop_images: Vec<String>,
}

impl HotelArgs {
    fn apply(self, view: &mut HotelFormView) {
        let form = view.form_mut();
        let fields = [
            (self.name, &mut form.name),
            (self.description, &mut form.description),
            (self.address, &mut form.address),
            (self.city, &mut form.city),
            (self.state, &mut form.state),
            (self.country, &mut form.country),
            (self.phone, &mut form.phone),
            (self.email, &mut form.email),
            (self.price, &mut form.price_per_night),
            (self.rating, &mut form.rating),
            (self.rooms, &mut form.available_rooms),
            (self.check_in_time, &mut form.check_in_time),
            (self.check_out_time, &mut form.check_out_time),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }

        for amenity in &self.drop_amenities {
            view.remove_amenity(amenity);
        }
        for amenity in &self.amenities {
            view.add_amenity(amenity);
        }
        for image in &self.drop_images {
            view.remove_image(image);
        }
        for image in &self.images {
            if !view.add_image(image) {
                tracing::warn!(image = %image, "Skipping invalid or duplicate image URL");
            }
        }
    }
}

fn badge(rating: f64) -> &'static str {
    match RatingBadge::for_rating(rating) {
        RatingBadge::Success => "+",
        RatingBadge::Warning => "~",
        RatingBadge::Default => " ",
    }
}

async fn loaded_dashboard(state: &AppState) -> anyhow::Result<DashboardView> {
    let mut view = DashboardView::new(state.api.clone(), state.api.clone(), state.api.clone());
    if let Some(route) = view.load(&state.session).await {
        return Err(refuse(route));
    }
    if let Some(error) = view.error() {
        anyhow::bail!("{error}");
    }
    Ok(view)
}

pub async fn dashboard(state: &AppState) -> anyhow::Result<()> {
    let view = loaded_dashboard(state).await?;
    let stats = view.stats();
    println!(
        "Hotels: {}   Users: {}   Administrators: {}\n",
        stats.hotels, stats.users, stats.admins
    );

    println!("Hotels");
    for hotel in view.hotels() {
        println!(
            "  {:<10} {:<32} {:<20} {:>8}  {}{:.1}  {} rooms",
            hotel.id,
            hotel.name,
            hotel.city,
            format_price(hotel.price_per_night),
            badge(hotel.rating),
            hotel.rating,
            hotel.available_rooms
        );
    }

    println!("\nUsers");
    for user in view.users() {
        println!("  {:<6} {:<24} {}", user.id, user.username, user.role.as_str());
    }
    Ok(())
}

/// Shared by create and update: fill the form, submit, then wait out the redirect.
async fn save_hotel(state: &AppState, id: Option<String>, args: HotelArgs) -> anyhow::Result<()> {
    let mut view = HotelFormView::new(state.api.clone(), state.api.clone(), id);
    if let Some(route) = view.load(&state.session).await {
        return Err(refuse(route));
    }
    if let Some(error) = view.error() {
        anyhow::bail!("{error}");
    }
    args.apply(&mut view);

    match view.submit().await {
        Some(redirect) => {
            if let Some(notification) = view.notification() {
                announce(notification);
            }
            follow(redirect).await;
            Ok(())
        }
        None if !view.field_errors().is_empty() => Err(field_errors(view.field_errors())),
        None => anyhow::bail!("{}", view.error().unwrap_or("Error saving hotel")),
    }
}

pub async fn create_hotel(state: &AppState, args: HotelArgs) -> anyhow::Result<()> {
    save_hotel(state, None, args).await
}

pub async fn update_hotel(state: &AppState, id: String, args: HotelArgs) -> anyhow::Result<()> {
    save_hotel(state, Some(id), args).await
}

async fn delete(state: &AppState, target: DeleteTarget, confirmed: bool) -> anyhow::Result<()> {
    let mut view = loaded_dashboard(state).await?;
    let description = match &target {
        DeleteTarget::Hotel(id) => {
            let hotel = view
                .hotels()
                .iter()
                .find(|h| &h.id == id)
                .ok_or_else(|| anyhow::anyhow!("Hotel {id} is not listed"))?;
            format!("hotel {} ({})", hotel.name, hotel.id)
        }
        DeleteTarget::User(id) => {
            let user = view
                .users()
                .iter()
                .find(|u| u.id == *id)
                .ok_or_else(|| anyhow::anyhow!("User {id} is not listed"))?;
            format!("user {} (id {})", user.username, user.id)
        }
    };

    view.request_delete(target);
    if !confirmed {
        println!("Would delete {description}. Re-run with --yes to confirm.");
        view.dismiss_delete();
        return Ok(());
    }

    let deleted = view.confirm_delete().await;
    if let Some(notification) = view.notification() {
        announce(notification);
    }
    if !deleted {
        anyhow::bail!("Could not delete {description}");
    }
    Ok(())
}

pub async fn delete_hotel(state: &AppState, id: String, confirmed: bool) -> anyhow::Result<()> {
    delete(state, DeleteTarget::Hotel(id), confirmed).await
}

pub async fn delete_user(state: &AppState, id: i64, confirmed: bool) -> anyhow::Result<()> {
    delete(state, DeleteTarget::User(id), confirmed).await
}

fn require_admin(state: &AppState) -> anyhow::Result<()> {
    if !state.session.is_admin() {
        anyhow::bail!("Administrator access required (innkeep login)");
    }
    Ok(())
}

pub async fn services(state: &AppState) -> anyhow::Result<()> {
    require_admin(state)?;
    let overview = state.api.microservices_status().await?;
    let summary = &overview.summary;
    println!(
        "{} services, {} instances, {} healthy, {} load balanced\n",
        summary.total_services,
        summary.total_instances,
        summary.healthy_services,
        summary.load_balanced_services
    );
    for service in &overview.services {
        println!(
            "{:<20} {:<10} {} instance(s){}",
            service.name,
            service.status,
            service.instances.len(),
            if service.load_balanced { "  [lb]" } else { "" }
        );
        for instance in &service.instances {
            println!(
                "  {:<24} {:<10} port {:<6} up {:<12} {}",
                instance.name, instance.status, instance.port, instance.uptime, instance.health
            );
        }
    }
    Ok(())
}

pub async fn scale(state: &AppState, service: &str, replicas: u32) -> anyhow::Result<()> {
    require_admin(state)?;
    let outcome = state.api.scale_service(service, replicas).await?;
    println!(
        "{} ({} now has {} replica(s))",
        outcome.message, outcome.service, outcome.new_replicas
    );
    Ok(())
}

pub async fn logs(state: &AppState, service: &str) -> anyhow::Result<()> {
    require_admin(state)?;
    let logs = state.api.service_logs(service).await?;
    println!("# {} {} {}", logs.service, logs.instance, logs.timestamp);
    for line in &logs.logs {
        println!("{line}");
    }
    Ok(())
}

pub async fn restart(state: &AppState, service: &str) -> anyhow::Result<()> {
    require_admin(state)?;
    let action = state.api.restart_service(service).await?;
    println!("{} ({} {})", action.message, action.service, action.instance);
    Ok(())
}
