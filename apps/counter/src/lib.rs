//! # Brew Counter Library
//!
//! Core library for the Brew POS terminal counter.
//!
//! ## Module Organization
//! ```text
//! brew_counter_lib/
//! ├── lib.rs          ◄─── You are here (run loop & tracing setup)
//! ├── tickets.rs      ◄─── Raw order input and menu validation
//! ├── barista.rs      ◄─── Preparation-step narration (tracing)
//! └── receipt.rs      ◄─── Receipt text rendering
//! ```
//!
//! ## Who Owns What
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Counter Run Loop                                     │
//! │                                                                         │
//! │  for each ticket:                                                       │
//! │    parse ticket ───────► off-menu drink? log the rejection, move on    │
//! │    read the clock ─────► the ONLY ambient clock read, once per order   │
//! │    process_order ──────► pure core call; Err leaves state untouched    │
//! │    on success:                                                          │
//! │      replace the state handle with the returned state                  │
//! │      barista narration (tracing)                                        │
//! │      print the receipt (stdout)                                         │
//! │                                                                         │
//! │  The state handle lives HERE. The core never stores it, and orders     │
//! │  are strictly serialized: each call completes and its returned state   │
//! │  feeds the next call.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod barista;
pub mod receipt;
pub mod tickets;

use chrono::Utc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use brew_core::{process_order, ShopState, TimeContext};

/// Runs the counter over the demo order feed.
///
/// ## Startup Sequence
/// 1. Initialize tracing (logging)
/// 2. Open the shop with full stock
/// 3. Work through the ticket feed, threading the state
/// 4. Log the end-of-day summary
pub fn run() {
    init_tracing();

    let mut state = ShopState::opening();
    info!(
        beans_g = state.remaining_beans_g,
        milk_ml = state.remaining_milk_ml,
        "counter open"
    );

    for (number, ticket) in tickets::sample_feed().into_iter().enumerate() {
        info!(number = number + 1, drink = %ticket.drink, size = %ticket.size, "new ticket");

        let order = match ticket.into_order() {
            Ok(order) => order,
            Err(err) => {
                warn!(%err, "ticket rejected");
                continue;
            }
        };

        // The single ambient clock read; the core only ever sees the value
        let now = Utc::now();

        match process_order(&state, &order, now) {
            Ok((next_state, completed)) => {
                state = next_state;

                let time = TimeContext::from_timestamp(now);
                barista::narrate(&order, &time);

                println!("{}", receipt::render(&order, &completed));
                if let Ok(json) = serde_json::to_string(&completed) {
                    info!(result = %json, "order completed");
                }
            }
            Err(err) => {
                warn!(%err, "order rejected");
            }
        }
    }

    info!(
        daily_sales = %state.daily_sales,
        drinks_made = state.total_coffee_made,
        beans_g = state.remaining_beans_g,
        milk_ml = state.remaining_milk_ml,
        "counter closed"
    );
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=brew=trace` - Show trace for brew crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
