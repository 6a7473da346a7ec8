//! # Order Processing
//!
//! The pure order processor: the single operation that turns
//! `(state, order, timestamp)` into `(new state, completed order)` or a
//! rejection.
//!
//! ## Processing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      process_order Pipeline                             │
//! │                                                                         │
//! │  (ShopState, Order, now)                                                │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  1. Resource needs      beans = shots × 7 g, milk by size              │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  2. Inventory check ────► Err(InsufficientInventory)                   │
//! │        │                  (state untouched, no price computed)         │
//! │        ▼                                                                │
//! │  3. Price               base + size + options, then happy-hour ×0.85  │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  4. Next state          count+1, sales+price, stock−needs              │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Ok((ShopState, CompletedOrder))                                        │
//! │                                                                         │
//! │  NO I/O, NO CLOCK READS: the timestamp is injected by the caller,      │
//! │  so the same inputs always produce the same outputs.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{OrderError, OrderResult, Resource};
use crate::menu::Order;
use crate::money::Money;
use crate::shop::ShopState;
use crate::{
    EXTRA_SHOT_SURCHARGE, HAPPY_HOUR_DISCOUNT_BPS, HAPPY_HOUR_END_HOUR, HAPPY_HOUR_START_HOUR,
    PUMPKIN_SEASON_FIRST_MONTH, PUMPKIN_SEASON_LAST_MONTH, PUMPKIN_SPICE_SURCHARGE,
    SYRUP_SURCHARGE, WHIPPED_CREAM_SURCHARGE,
};

// =============================================================================
// Time Context
// =============================================================================

/// The two time-of-day facts pricing cares about.
///
/// Derived once from the injected timestamp; nothing downstream touches the
/// clock again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeContext {
    /// Hour within the happy-hour window, [15, 17) half-open.
    pub is_happy_hour: bool,
    /// Month within pumpkin season, September through December inclusive.
    pub is_pumpkin_season: bool,
}

impl TimeContext {
    /// Derives the pricing context from an order timestamp.
    pub fn from_timestamp(now: DateTime<Utc>) -> Self {
        let hour = now.hour();
        let month = now.month();
        TimeContext {
            is_happy_hour: hour >= HAPPY_HOUR_START_HOUR && hour < HAPPY_HOUR_END_HOUR,
            is_pumpkin_season: (PUMPKIN_SEASON_FIRST_MONTH..=PUMPKIN_SEASON_LAST_MONTH)
                .contains(&month),
        }
    }
}

// =============================================================================
// Completed Order
// =============================================================================

/// The record of one accepted order, as handed back to the caller.
///
/// Transient: created per call, consumed by the receipt printer, never
/// stored in [`ShopState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedOrder {
    /// Receipt label, e.g. "large americano".
    pub drink: String,
    /// Final price, rounded to whole cents.
    pub price: Money,
    /// The timestamp the order was processed with.
    pub timestamp: DateTime<Utc>,
}

impl CompletedOrder {
    /// Loyalty points earned: one point per whole dollar of the final price.
    #[inline]
    pub const fn loyalty_points(&self) -> i64 {
        self.price.dollars()
    }
}

// =============================================================================
// Pricing
// =============================================================================

/// Computes the price of an order under the given time context.
///
/// Order of application is fixed: catalog base, size surcharge, option
/// surcharges (each independent), then the happy-hour discount over the
/// whole total. Pumpkin spice outside pumpkin season adds nothing and is
/// not an error.
pub fn compute_price(order: &Order, time: &TimeContext) -> Money {
    let mut price = order.coffee_type.base_price();
    price += order.size.surcharge();

    if order.options.extra_shot {
        price += EXTRA_SHOT_SURCHARGE;
    }
    if order.options.has_syrup() {
        price += SYRUP_SURCHARGE;
    }
    if order.options.whipped_cream {
        price += WHIPPED_CREAM_SURCHARGE;
    }
    if time.is_pumpkin_season && order.options.pumpkin_spice {
        price += PUMPKIN_SPICE_SURCHARGE;
    }

    // The discount comes last, over every additive surcharge
    if time.is_happy_hour {
        price = price.apply_percentage_discount(HAPPY_HOUR_DISCOUNT_BPS);
    }

    price
}

// =============================================================================
// Order Processor
// =============================================================================

/// Processes one order against the current shop state.
///
/// Pure function: no I/O, no clock reads, no mutation of its inputs. On
/// success it returns the replacement state together with the completed
/// order; on rejection it returns the error alone, so the state the caller
/// already holds is untouched by construction.
///
/// Sequencing is the caller's job: thread the returned state into the next
/// call. The processor holds no internal state and needs no locking.
///
/// ## Errors
/// [`OrderError::InsufficientInventory`] when bean or milk stock is below
/// the order's requirement. Detected before anything is computed, so a
/// partial deduction cannot happen.
///
/// ## Example
/// ```rust
/// use brew_core::{process_order, Order, ShopState};
/// use brew_core::menu::{CoffeeType, CupSize, OrderOptions};
/// use chrono::{TimeZone, Utc};
///
/// let state = ShopState::opening();
/// let order = Order {
///     coffee_type: CoffeeType::Latte,
///     size: CupSize::Medium,
///     options: OrderOptions::default(),
/// };
/// let now = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
///
/// let (state, completed) = process_order(&state, &order, now).unwrap();
/// assert_eq!(completed.price.cents(), 525);
/// assert_eq!(state.total_coffee_made, 1);
/// ```
pub fn process_order(
    state: &ShopState,
    order: &Order,
    now: DateTime<Utc>,
) -> OrderResult<(ShopState, CompletedOrder)> {
    let beans_required = order.beans_required_g();
    let milk_required = order.milk_required_ml();

    // Inventory pre-check: both resources, before any pricing
    if state.remaining_beans_g < beans_required {
        return Err(OrderError::InsufficientInventory {
            resource: Resource::Beans,
            available_amount: state.remaining_beans_g,
            required_amount: beans_required,
        });
    }
    if state.remaining_milk_ml < milk_required {
        return Err(OrderError::InsufficientInventory {
            resource: Resource::Milk,
            available_amount: state.remaining_milk_ml,
            required_amount: milk_required,
        });
    }

    let time = TimeContext::from_timestamp(now);
    let price = compute_price(order, &time);

    let next_state = ShopState {
        daily_sales: state.daily_sales + price,
        total_coffee_made: state.total_coffee_made + 1,
        remaining_beans_g: state.remaining_beans_g - beans_required,
        remaining_milk_ml: state.remaining_milk_ml - milk_required,
    };

    let completed = CompletedOrder {
        drink: order.drink_name(),
        price,
        timestamp: now,
    };

    Ok((next_state, completed))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{CoffeeType, CupSize, OrderOptions};
    use chrono::TimeZone;

    /// A quiet Saturday morning in June: no happy hour, no pumpkin season.
    fn off_peak() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap()
    }

    fn at_hour_minute(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, hour, minute, 0).unwrap()
    }

    fn in_month(month: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, month, 10, 10, 0, 0).unwrap()
    }

    fn plain(coffee_type: CoffeeType, size: CupSize) -> Order {
        Order {
            coffee_type,
            size,
            options: OrderOptions::default(),
        }
    }

    #[test]
    fn test_americano_large_with_extras() {
        // base 3.50 + large 1.50 + extra shot 0.80 + syrup 0.50 = 6.30
        let order = Order {
            coffee_type: CoffeeType::Americano,
            size: CupSize::Large,
            options: OrderOptions {
                extra_shot: true,
                syrup: Some("caramel".to_string()),
                ..OrderOptions::default()
            },
        };
        let state = ShopState::opening();

        let (next, completed) = process_order(&state, &order, off_peak()).unwrap();

        assert_eq!(completed.price.cents(), 630);
        assert_eq!(completed.drink, "large americano");
        assert_eq!(next.remaining_beans_g, 1000 - 14);
        assert_eq!(next.remaining_milk_ml, 2000); // americano: no milk
    }

    #[test]
    fn test_latte_medium_at_happy_hour() {
        // base 4.50 + medium 0.75 = 5.25, ×0.85 = 4.4625 → 4.46 (half up)
        let order = plain(CoffeeType::Latte, CupSize::Medium);
        let state = ShopState::opening();

        let (_, completed) = process_order(&state, &order, at_hour_minute(16, 0)).unwrap();

        assert_eq!(completed.price.cents(), 446);
    }

    #[test]
    fn test_happy_hour_boundaries() {
        let order = plain(CoffeeType::Latte, CupSize::Medium);
        let state = ShopState::opening();
        let full_price = 525;
        let discounted = 446;

        let cases = [
            (14, 59, full_price), // one minute before the window
            (15, 0, discounted),  // window opens
            (16, 59, discounted), // last minute inside
            (17, 0, full_price),  // window is half-open: 17:00 pays full
        ];
        for (hour, minute, expected) in cases {
            let (_, completed) =
                process_order(&state, &order, at_hour_minute(hour, minute)).unwrap();
            assert_eq!(
                completed.price.cents(),
                expected,
                "price at {hour:02}:{minute:02}"
            );
        }
    }

    #[test]
    fn test_pumpkin_season_boundaries() {
        let order = Order {
            coffee_type: CoffeeType::Latte,
            size: CupSize::Small,
            options: OrderOptions {
                pumpkin_spice: true,
                ..OrderOptions::default()
            },
        };
        let state = ShopState::opening();
        let base = 450;
        let spiced = base + 90;

        let cases = [
            (8, base),    // August: not yet
            (9, spiced),  // season opens
            (12, spiced), // season closes with the year
            (1, base),    // January: over
        ];
        for (month, expected) in cases {
            let (_, completed) = process_order(&state, &order, in_month(month)).unwrap();
            assert_eq!(completed.price.cents(), expected, "price in month {month}");
        }
    }

    #[test]
    fn test_pumpkin_spice_off_season_is_silently_ignored() {
        // Not an error, not a surcharge: the drink is simply made without it
        let order = Order {
            coffee_type: CoffeeType::Cappuccino,
            size: CupSize::Small,
            options: OrderOptions {
                pumpkin_spice: true,
                ..OrderOptions::default()
            },
        };
        let state = ShopState::opening();

        let (_, completed) = process_order(&state, &order, off_peak()).unwrap();
        assert_eq!(completed.price.cents(), 470);
    }

    #[test]
    fn test_all_options_in_season() {
        // cappuccino 4.70 + large 1.50 + shot 0.80 + syrup 0.50
        //   + cream 1.00 + pumpkin 0.90 = 9.40
        let order = Order {
            coffee_type: CoffeeType::Cappuccino,
            size: CupSize::Large,
            options: OrderOptions {
                extra_shot: true,
                syrup: Some("vanilla".to_string()),
                whipped_cream: true,
                pumpkin_spice: true,
            },
        };
        let state = ShopState::opening();

        let (next, completed) = process_order(&state, &order, in_month(10)).unwrap();
        assert_eq!(completed.price.cents(), 940);
        assert_eq!(next.remaining_beans_g, 1000 - 14);
        assert_eq!(next.remaining_milk_ml, 2000 - 350);
    }

    #[test]
    fn test_accepted_order_updates_totals() {
        let order = plain(CoffeeType::Latte, CupSize::Medium);
        let state = ShopState::opening();

        let (next, completed) = process_order(&state, &order, off_peak()).unwrap();

        assert_eq!(next.total_coffee_made, state.total_coffee_made + 1);
        assert_eq!(next.daily_sales, state.daily_sales + completed.price);
        assert_eq!(
            next.remaining_beans_g,
            state.remaining_beans_g - order.beans_required_g()
        );
        assert_eq!(
            next.remaining_milk_ml,
            state.remaining_milk_ml - order.milk_required_ml()
        );
    }

    #[test]
    fn test_state_threads_across_orders() {
        let now = off_peak();
        let state = ShopState::opening();

        let (state, first) =
            process_order(&state, &plain(CoffeeType::Latte, CupSize::Medium), now).unwrap();
        let (state, second) =
            process_order(&state, &plain(CoffeeType::Americano, CupSize::Small), now).unwrap();

        assert_eq!(state.total_coffee_made, 2);
        assert_eq!(state.daily_sales, first.price + second.price);
        assert_eq!(state.remaining_beans_g, 1000 - 7 - 7);
        assert_eq!(state.remaining_milk_ml, 2000 - 250);
    }

    #[test]
    fn test_insufficient_beans_rejects() {
        let order = Order {
            coffee_type: CoffeeType::Americano,
            size: CupSize::Small,
            options: OrderOptions {
                extra_shot: true,
                ..OrderOptions::default()
            },
        };
        let state = ShopState {
            remaining_beans_g: 13, // a double shot needs 14 g
            ..ShopState::opening()
        };

        let err = process_order(&state, &order, off_peak()).unwrap_err();
        assert_eq!(
            err,
            OrderError::InsufficientInventory {
                resource: Resource::Beans,
                available_amount: 13,
                required_amount: 14,
            }
        );
    }

    #[test]
    fn test_insufficient_milk_rejects() {
        let order = plain(CoffeeType::Cappuccino, CupSize::Large);
        let state = ShopState {
            remaining_milk_ml: 300,
            ..ShopState::opening()
        };

        let err = process_order(&state, &order, off_peak()).unwrap_err();
        assert_eq!(
            err,
            OrderError::InsufficientInventory {
                resource: Resource::Milk,
                available_amount: 300,
                required_amount: 350,
            }
        );
    }

    #[test]
    fn test_rejection_leaves_state_untouched() {
        let order = plain(CoffeeType::Latte, CupSize::Large);
        let state = ShopState {
            remaining_milk_ml: 0,
            ..ShopState::opening()
        };
        let before = state.clone();

        assert!(process_order(&state, &order, off_peak()).is_err());

        // The caller's state is exactly what it was: no sales, no count,
        // no deduction
        assert_eq!(state, before);
    }

    #[test]
    fn test_americano_sells_with_zero_milk() {
        // Milk stock is irrelevant to a drink that takes none
        let order = plain(CoffeeType::Americano, CupSize::Large);
        let state = ShopState {
            remaining_milk_ml: 0,
            ..ShopState::opening()
        };

        let (next, _) = process_order(&state, &order, off_peak()).unwrap();
        assert_eq!(next.remaining_milk_ml, 0);
    }

    #[test]
    fn test_loyalty_points_floor_of_dollars() {
        let order = Order {
            coffee_type: CoffeeType::Americano,
            size: CupSize::Large,
            options: OrderOptions {
                extra_shot: true,
                syrup: Some("caramel".to_string()),
                ..OrderOptions::default()
            },
        };
        let state = ShopState::opening();

        let (_, completed) = process_order(&state, &order, off_peak()).unwrap();
        assert_eq!(completed.price.cents(), 630);
        assert_eq!(completed.loyalty_points(), 6);
    }

    #[test]
    fn test_timestamp_is_passed_through() {
        let now = off_peak();
        let state = ShopState::opening();

        let (_, completed) =
            process_order(&state, &plain(CoffeeType::Latte, CupSize::Small), now).unwrap();
        assert_eq!(completed.timestamp, now);
    }
}
