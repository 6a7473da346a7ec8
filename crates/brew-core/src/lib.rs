//! # brew-core: Pure Business Logic for Brew POS
//!
//! This crate is the **heart** of Brew POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Brew POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                apps/counter (Terminal Driver)                   │   │
//! │  │   reads clock ──► parses tickets ──► prints receipts/narration  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ brew-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   menu    │  │   money   │  │   shop    │  │   order   │  │   │
//! │  │   │ CoffeeType│  │   Money   │  │ ShopState │  │ processor │  │   │
//! │  │   │  CupSize  │  │  (cents)  │  │ inventory │  │  pricing  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK READS • NO CONSOLE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`menu`] - The drink catalog (CoffeeType, CupSize, OrderOptions, Order)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`shop`] - ShopState: running totals and inventory
//! - [`order`] - The order processor and pricing
//! - [`error`] - Order rejection types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **Injected Time**: The order timestamp is a parameter, never an ambient
//!    clock read, so happy-hour and seasonal pricing are testable
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All rejections are typed, never strings or panics
//! 5. **Replaced, Not Mutated**: state goes in by reference and comes back as
//!    a fresh value; a rejected order cannot touch the caller's state
//!
//! ## Example Usage
//!
//! ```rust
//! use brew_core::{process_order, Order, ShopState};
//! use brew_core::menu::{CoffeeType, CupSize, OrderOptions};
//! use chrono::{TimeZone, Utc};
//!
//! let state = ShopState::opening();
//! let order = Order {
//!     coffee_type: CoffeeType::Americano,
//!     size: CupSize::Large,
//!     options: OrderOptions { extra_shot: true, ..OrderOptions::default() },
//! };
//! let now = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
//!
//! let (state, completed) = process_order(&state, &order, now).unwrap();
//! assert_eq!(state.remaining_beans_g, 1000 - 14);
//! assert_eq!(completed.drink, "large americano");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod menu;
pub mod money;
pub mod order;
pub mod shop;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use brew_core::Money` instead of
// `use brew_core::money::Money`

pub use error::{OrderError, OrderResult, Resource};
pub use menu::{CoffeeType, CupSize, Order, OrderOptions};
pub use money::Money;
pub use order::{compute_price, process_order, CompletedOrder, TimeContext};
pub use shop::ShopState;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Grams of beans consumed per espresso shot.
pub const BEANS_PER_SHOT_G: u32 = 7;

/// Beans in stock when the shop opens (grams).
pub const OPENING_BEANS_G: u32 = 1000;

/// Milk in stock when the shop opens (milliliters).
pub const OPENING_MILK_ML: u32 = 2000;

/// First hour of the happy-hour window (inclusive).
pub const HAPPY_HOUR_START_HOUR: u32 = 15;

/// End hour of the happy-hour window (exclusive): an order at exactly
/// 17:00 pays full price.
pub const HAPPY_HOUR_END_HOUR: u32 = 17;

/// Happy-hour discount in basis points (1500 = 15% off).
pub const HAPPY_HOUR_DISCOUNT_BPS: u32 = 1500;

/// First month of pumpkin season (September, 1-indexed).
pub const PUMPKIN_SEASON_FIRST_MONTH: u32 = 9;

/// Last month of pumpkin season (December, inclusive).
pub const PUMPKIN_SEASON_LAST_MONTH: u32 = 12;

/// Surcharge for a second espresso shot.
pub const EXTRA_SHOT_SURCHARGE: Money = Money::from_cents(80);

/// Surcharge for any flavor syrup.
pub const SYRUP_SURCHARGE: Money = Money::from_cents(50);

/// Surcharge for whipped cream.
pub const WHIPPED_CREAM_SURCHARGE: Money = Money::from_cents(100);

/// Surcharge for pumpkin spice, honored only during pumpkin season.
pub const PUMPKIN_SPICE_SURCHARGE: Money = Money::from_cents(90);
