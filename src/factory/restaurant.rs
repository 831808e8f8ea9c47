use super::{Burger, BurgerKind};
use crate::diagnostics::DiagnosticSink;

/// A creator bound to one burger variant.
pub trait Restaurant {
    fn kind(&self) -> BurgerKind;

    /// Extras this restaurant offers. Fixed per variant.
    fn available_extras(&self) -> &[&'static str];

    fn create_burger(&self, extras: &[String]) -> Burger;

    /// Creates a burger and prepares it straight away. The burger never
    /// leaves this call.
    fn order_burger(&self, extras: &[String], sink: &dyn DiagnosticSink) {
        let burger = self.create_burger(extras);
        burger.prepare(sink);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CheeseRestaurant;

impl Restaurant for CheeseRestaurant {
    fn kind(&self) -> BurgerKind {
        BurgerKind::Cheese
    }

    fn available_extras(&self) -> &[&'static str] {
        &["tomato", "tartara sauce"]
    }

    fn create_burger(&self, extras: &[String]) -> Burger {
        Burger::new(BurgerKind::Cheese, extras)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChickenRestaurant;

impl Restaurant for ChickenRestaurant {
    fn kind(&self) -> BurgerKind {
        BurgerKind::Chicken
    }

    fn available_extras(&self) -> &[&'static str] {
        &["tomato", "coco sauce"]
    }

    fn create_burger(&self, extras: &[String]) -> Burger {
        Burger::new(BurgerKind::Chicken, extras)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BeefRestaurant;

impl Restaurant for BeefRestaurant {
    fn kind(&self) -> BurgerKind {
        BurgerKind::Beef
    }

    fn available_extras(&self) -> &[&'static str] {
        &["tomato", "bbq sauce"]
    }

    fn create_burger(&self, extras: &[String]) -> Burger {
        Burger::new(BurgerKind::Beef, extras)
    }
}
