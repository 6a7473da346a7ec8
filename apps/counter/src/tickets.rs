//! # Order Tickets
//!
//! Raw order input, as scribbled on a paper ticket: free-text drink and
//! size names plus option flags. Parsing a ticket into a typed
//! [`Order`] is the boundary where an off-menu drink is rejected with
//! [`OrderError::UnknownCoffeeType`](brew_core::OrderError::UnknownCoffeeType) —
//! past this point every catalog lookup is total.

use serde::{Deserialize, Serialize};

use brew_core::{CoffeeType, CupSize, Order, OrderOptions, OrderResult};

/// A raw order ticket, before validation against the menu.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Ticket {
    /// Drink name as written, e.g. "latte".
    pub drink: String,
    /// Size label as written; anything unrecognized becomes a small cup.
    pub size: String,
    pub extra_shot: bool,
    pub syrup: Option<String>,
    pub whipped_cream: bool,
    pub pumpkin_spice: bool,
}

impl Ticket {
    /// Validates the ticket against the menu.
    ///
    /// ## Errors
    /// `UnknownCoffeeType` when the drink name is not in the catalog. The
    /// size is forgiving (unknown labels fall back to small); the drink is
    /// not.
    pub fn into_order(self) -> OrderResult<Order> {
        let coffee_type: CoffeeType = self.drink.parse()?;
        let size = CupSize::from_label(&self.size);

        Ok(Order {
            coffee_type,
            size,
            options: OrderOptions {
                extra_shot: self.extra_shot,
                syrup: self.syrup,
                whipped_cream: self.whipped_cream,
                pumpkin_spice: self.pumpkin_spice,
            },
        })
    }
}

/// The demo order feed: a plain latte, a customized americano, a loaded
/// cappuccino, and one off-menu request to show the rejection path.
pub fn sample_feed() -> Vec<Ticket> {
    vec![
        Ticket {
            drink: "latte".to_string(),
            size: "medium".to_string(),
            ..Ticket::default()
        },
        Ticket {
            drink: "americano".to_string(),
            size: "large".to_string(),
            extra_shot: true,
            syrup: Some("caramel".to_string()),
            ..Ticket::default()
        },
        Ticket {
            drink: "cappuccino".to_string(),
            size: "large".to_string(),
            extra_shot: true,
            syrup: Some("vanilla".to_string()),
            whipped_cream: true,
            pumpkin_spice: true,
            ..Ticket::default()
        },
        Ticket {
            drink: "matcha".to_string(),
            size: "small".to_string(),
            ..Ticket::default()
        },
    ]
}
