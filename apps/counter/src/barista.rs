//! # Barista Narration
//!
//! Preparation-step narration for an accepted order, emitted through
//! `tracing`. This is a pure observer: it reads the order and the time
//! context the processor already derived, and it cannot influence the
//! price or the shop state. The driver invokes it only after the
//! processor has accepted the order.

use tracing::info;

use brew_core::{Order, TimeContext};

/// Narrates the making of one accepted drink.
pub fn narrate(order: &Order, time: &TimeContext) {
    info!(
        drink = %order.drink_name(),
        shots = order.shot_count(),
        "starting preparation"
    );

    info!(
        beans_g = order.beans_required_g(),
        shots = order.shot_count(),
        "grinding beans and pulling shots"
    );

    let milk_ml = order.milk_required_ml();
    if milk_ml > 0 {
        info!(milk_ml, "steaming milk");
    }

    if let Some(label) = order.options.syrup.as_deref().filter(|l| !l.trim().is_empty()) {
        info!(syrup = label, "adding syrup");
    }

    if order.options.whipped_cream {
        info!("topping with whipped cream");
    }

    if order.options.pumpkin_spice {
        if time.is_pumpkin_season {
            info!("dusting with pumpkin spice");
        } else {
            // Requested out of season: made without it, no surcharge
            info!("pumpkin spice requested out of season, skipping");
        }
    }

    if time.is_happy_hour {
        info!("happy hour: 15% off the total");
    }

    info!(size = %order.size, "drink ready, handing over the cup");
}
