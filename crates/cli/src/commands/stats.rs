//! Dashboard summary.

use std::io::{self, Write};

use orderdesk_admin::{services::DashboardStats, state::AppState};
use orderdesk_core::{Currency, Price};

/// Print totals for every order in the snapshot.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn show(state: &AppState, json: bool, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let stats = state.stats();

    if json {
        serde_json::to_writer_pretty(&mut *out, &stats)?;
        writeln!(out)?;
    } else {
        render(&stats, out)?;
    }

    tracing::info!(orders = stats.total_orders, "Printed dashboard stats");
    Ok(())
}

/// Text rendering shared with `orders`.
pub fn render(stats: &DashboardStats, out: &mut impl Write) -> io::Result<()> {
    let revenue = Price::new(stats.total_revenue, Currency::USD);

    writeln!(out, "Total orders:   {}", stats.total_orders)?;
    writeln!(out, "Total revenue:  {} (USD)", revenue.display())?;
    writeln!(out, "Delivered:      {}", stats.delivered_count)?;
    writeln!(out, "Processing:     {}", stats.processing_count)?;

    if stats.region_stats.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{:<6}  {:>6}  {:>14}", "Region", "Orders", "Revenue")?;
    for region in &stats.region_stats {
        let revenue = Price::new(region.total_revenue, region.currency);
        writeln!(
            out,
            "{:<6}  {:>6}  {:>14}",
            region.region,
            region.total_orders,
            revenue.display()
        )?;
    }
    Ok(())
}
