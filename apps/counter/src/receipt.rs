//! # Receipt Rendering
//!
//! Turns an accepted order into the multi-line receipt text printed at the
//! counter. Pure string building: the numbers were all fixed by the
//! processor before this module sees them.

use brew_core::{CompletedOrder, Order};

/// Renders the receipt for one accepted order.
///
/// ## Format
/// ```text
/// ----- RECEIPT -----
/// order:   medium latte
/// options: extra shot, caramel syrup
/// price:   $4.46
/// time:    16:00:00
/// points:  4 earned
/// -------------------
/// ```
///
/// The options line lists what the customer asked for ("none" when the
/// drink is plain); pricing of those options happened in the processor.
pub fn render(order: &Order, completed: &CompletedOrder) -> String {
    let mut lines = Vec::new();
    lines.push("----- RECEIPT -----".to_string());
    lines.push(format!("order:   {}", completed.drink));
    lines.push(format!("options: {}", describe_options(order)));
    lines.push(format!("price:   {}", completed.price));
    lines.push(format!("time:    {}", completed.timestamp.format("%H:%M:%S")));
    lines.push(format!("points:  {} earned", completed.loyalty_points()));
    lines.push("-------------------".to_string());
    lines.join("\n")
}

/// Human-readable option list, "none" when the drink is plain.
fn describe_options(order: &Order) -> String {
    let mut parts = Vec::new();

    if order.options.extra_shot {
        parts.push("extra shot".to_string());
    }
    if let Some(label) = order.options.syrup.as_deref().filter(|l| !l.trim().is_empty()) {
        parts.push(format!("{label} syrup"));
    }
    if order.options.whipped_cream {
        parts.push("whipped cream".to_string());
    }
    if order.options.pumpkin_spice {
        parts.push("pumpkin spice".to_string());
    }

    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join(", ")
    }
}
