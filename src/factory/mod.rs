//! Factory dispatcher for the burger family.
//!
//! A category key resolves to exactly one [`Restaurant`]; the restaurant owns
//! the single routine that turns a list of extras into a [`Burger`]. Two
//! interchangeable styles are provided: one type per variant
//! ([`restaurant`]) and one record per variant holding a creation function
//! ([`record`]).

pub mod dispatcher;
pub mod record;
pub mod restaurant;

use std::fmt;
use std::str::FromStr;

use crate::diagnostics::DiagnosticSink;
use crate::error::PatternError;

pub use dispatcher::{record_restaurants, restaurants, Dispatcher};
pub use record::RecordRestaurant;
pub use restaurant::{BeefRestaurant, CheeseRestaurant, ChickenRestaurant, Restaurant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BurgerKind {
    Cheese,
    Chicken,
    Beef,
}

impl BurgerKind {
    pub const ALL: [BurgerKind; 3] = [BurgerKind::Cheese, BurgerKind::Chicken, BurgerKind::Beef];

    pub fn key(&self) -> &'static str {
        match self {
            BurgerKind::Cheese => "cheese",
            BurgerKind::Chicken => "chicken",
            BurgerKind::Beef => "beef",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BurgerKind::Cheese => "Cheese Burger",
            BurgerKind::Chicken => "Chicken Burger",
            BurgerKind::Beef => "Beef Burger",
        }
    }

    pub fn base_ingredients(&self) -> &'static str {
        match self {
            BurgerKind::Cheese => "Cheese, bread",
            BurgerKind::Chicken => "Chicken, bread",
            BurgerKind::Beef => "Beef, bread",
        }
    }

    pub fn base_price(&self) -> u32 {
        match self {
            BurgerKind::Cheese => 10,
            BurgerKind::Chicken => 15,
            BurgerKind::Beef => 25,
        }
    }
}

impl fmt::Display for BurgerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BurgerKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        BurgerKind::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| {
                PatternError::unrecognized_category(s, BurgerKind::ALL.iter().map(|k| k.key()))
            })
    }
}

/// A prepared-to-order burger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Burger {
    kind: BurgerKind,
    ingredients: String,
    price: u32,
}

impl Burger {
    /// Base ingredients of `kind` followed by `extras`, verbatim and in order.
    pub fn new<S: AsRef<str>>(kind: BurgerKind, extras: &[S]) -> Self {
        let mut ingredients = kind.base_ingredients().to_string();
        for extra in extras {
            ingredients.push_str(", ");
            ingredients.push_str(extra.as_ref());
        }

        Burger {
            kind,
            ingredients,
            price: kind.base_price(),
        }
    }

    pub fn kind(&self) -> BurgerKind {
        self.kind
    }

    pub fn ingredients(&self) -> &str {
        &self.ingredients
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn describe(&self) -> String {
        self.ingredients.clone()
    }

    pub fn preparation_message(&self) -> String {
        format!("Preparing {} with {}", self.kind.display_name(), self.ingredients)
    }

    /// Emits the preparation message to `sink`.
    pub fn prepare(&self, sink: &dyn DiagnosticSink) {
        sink.info(&self.preparation_message());
    }
}

/// Splits free-text input on commas. Entries are kept as typed; empty input
/// yields no extras.
pub fn parse_extras(input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }
    input.split(',').map(str::to_string).collect()
}
