use std::fmt;

use super::restaurant::Restaurant;
use super::{Burger, BurgerKind};

/// A restaurant described as plain data: its extras and one creation
/// function.
#[derive(Clone, Copy)]
pub struct RecordRestaurant {
    kind: BurgerKind,
    extras: &'static [&'static str],
    create: fn(&[String]) -> Burger,
}

impl fmt::Debug for RecordRestaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordRestaurant")
            .field("kind", &self.kind)
            .field("extras", &self.extras)
            .finish_non_exhaustive()
    }
}

fn create_cheese_burger(extras: &[String]) -> Burger {
    Burger::new(BurgerKind::Cheese, extras)
}

fn create_chicken_burger(extras: &[String]) -> Burger {
    Burger::new(BurgerKind::Chicken, extras)
}

fn create_beef_burger(extras: &[String]) -> Burger {
    Burger::new(BurgerKind::Beef, extras)
}

impl RecordRestaurant {
    pub fn cheese() -> Self {
        Self {
            kind: BurgerKind::Cheese,
            extras: &["tomato", "tartara sauce"],
            create: create_cheese_burger,
        }
    }

    pub fn chicken() -> Self {
        Self {
            kind: BurgerKind::Chicken,
            extras: &["tomato", "coco sauce"],
            create: create_chicken_burger,
        }
    }

    pub fn beef() -> Self {
        Self {
            kind: BurgerKind::Beef,
            extras: &["tomato", "bbq sauce"],
            create: create_beef_burger,
        }
    }

    pub fn for_kind(kind: BurgerKind) -> Self {
        match kind {
            BurgerKind::Cheese => Self::cheese(),
            BurgerKind::Chicken => Self::chicken(),
            BurgerKind::Beef => Self::beef(),
        }
    }
}

impl Restaurant for RecordRestaurant {
    fn kind(&self) -> BurgerKind {
        self.kind
    }

    fn available_extras(&self) -> &[&'static str] {
        self.extras
    }

    fn create_burger(&self, extras: &[String]) -> Burger {
        (self.create)(extras)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;
    use crate::factory::restaurant::{BeefRestaurant, CheeseRestaurant, ChickenRestaurant};

    #[test]
    fn test_for_kind_binds_matching_variant() {
        for kind in BurgerKind::ALL {
            assert_eq!(RecordRestaurant::for_kind(kind).kind(), kind);
        }
    }

    #[test]
    fn test_records_match_typed_restaurants() {
        let typed: [&dyn Restaurant; 3] = [&CheeseRestaurant, &ChickenRestaurant, &BeefRestaurant];
        let extras = vec!["tomato".to_string(), "pickles".to_string()];

        for restaurant in typed {
            let record = RecordRestaurant::for_kind(restaurant.kind());
            assert_eq!(record.available_extras(), restaurant.available_extras());
            assert_eq!(record.create_burger(&extras), restaurant.create_burger(&extras));
        }
    }

    #[test]
    fn test_record_order_burger() {
        let sink = MemorySink::new();
        RecordRestaurant::beef().order_burger(&["bbq sauce".to_string()], &sink);
        assert_eq!(
            sink.messages(),
            vec!["Preparing Beef Burger with Beef, bread, bbq sauce"]
        );
    }
}
