use innkeep_core::domain::format_date;
use innkeep_core::views::ReservationsView;

use super::{announce, refuse, today};
use crate::state::AppState;

pub async fn list(state: &AppState) -> anyhow::Result<()> {
    let mut view = ReservationsView::new(state.api.clone());
    if let Some(route) = view.load(&state.session).await {
        return Err(refuse(route));
    }
    if let Some(error) = view.error() {
        anyhow::bail!("{error}");
    }

    let rows = view.rows(today());
    if rows.is_empty() {
        println!("You have no reservations yet.");
        return Ok(());
    }
    for row in rows {
        let r = &row.reservation;
        println!(
            "{:<12} {:<28} {} -> {}  {} night(s)  {}",
            r.id,
            r.hotel_name,
            format_date(r.check_in),
            format_date(r.check_out),
            row.nights,
            row.status.label()
        );
    }
    Ok(())
}

pub async fn cancel(state: &AppState, id: &str, confirmed: bool) -> anyhow::Result<()> {
    let mut view = ReservationsView::new(state.api.clone());
    if let Some(route) = view.load(&state.session).await {
        return Err(refuse(route));
    }
    if let Some(error) = view.error() {
        anyhow::bail!("{error}");
    }
    if !view.request_cancel(id, today()) {
        anyhow::bail!("Reservation {id} cannot be cancelled");
    }

    if !confirmed {
        if let Some(r) = view.pending_cancel() {
            println!(
                "Would cancel {} at {} ({} -> {}). Re-run with --yes to confirm.",
                r.id,
                r.hotel_name,
                format_date(r.check_in),
                format_date(r.check_out)
            );
        }
        view.dismiss_cancel();
        return Ok(());
    }

    let cancelled = view.confirm_cancel().await;
    if let Some(notification) = view.notification() {
        announce(notification);
    }
    if !cancelled {
        anyhow::bail!("Reservation {id} was not cancelled");
    }
    Ok(())
}
