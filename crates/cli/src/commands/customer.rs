//! Customer detail.

use std::io::Write;

use orderdesk_admin::state::AppState;
use orderdesk_core::{Currency, CustomerId, Price};

/// Print one customer's contact details, totals and recent orders.
///
/// # Errors
///
/// Returns an error if the customer does not exist or writing fails.
pub fn show(
    state: &AppState,
    id: &CustomerId,
    json: bool,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let summary = state.customer_summary(id)?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &summary)?;
        writeln!(out)?;
        return Ok(());
    }

    let customer = summary.customer;
    writeln!(out, "{} ({})", customer.name, customer.customer_id)?;
    writeln!(out, "Email:        {}", customer.email)?;
    writeln!(out, "Phone:        {}", customer.phone)?;
    writeln!(out, "Region:       {}", customer.region)?;
    writeln!(out, "Orders:       {}", summary.total_orders)?;
    writeln!(
        out,
        "Total spent:  {} (USD)",
        Price::new(summary.total_spent_usd, Currency::USD)
    )?;

    if summary.recent_orders.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "Recent orders:")?;
    for order in &summary.recent_orders {
        writeln!(
            out,
            "  {}  {:<22}  x{}  {:>10}  {}",
            order.created_date(),
            order.product,
            order.quantity,
            order.price(),
            order.status
        )?;
    }
    Ok(())
}
