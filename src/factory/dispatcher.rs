use super::record::RecordRestaurant;
use super::restaurant::{BeefRestaurant, CheeseRestaurant, ChickenRestaurant, Restaurant};
use crate::error::{PatternError, Result};

/// Lookup table from category key to constructor.
///
/// Keys are trimmed and matched case-insensitively. An unknown key resolves
/// to [`PatternError::UnrecognizedCategory`] before any constructor runs.
pub struct Dispatcher<C> {
    entries: Vec<(&'static str, fn() -> C)>,
}

impl<C> Dispatcher<C> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds `key`, replacing any constructor already registered under a key
    /// that matches it the way [`resolve`](Self::resolve) does.
    pub fn register(mut self, key: &'static str, ctor: fn() -> C) -> Self {
        let key = key.trim();
        match self.entry_mut(key) {
            Some(entry) => entry.1 = ctor,
            None => self.entries.push((key, ctor)),
        }
        self
    }

    fn entry_mut(&mut self, key: &str) -> Option<&mut (&'static str, fn() -> C)> {
        self.entries
            .iter_mut()
            .find(|(registered, _)| registered.eq_ignore_ascii_case(key))
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(key, _)| *key).collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    pub fn resolve(&self, key: &str) -> Result<C> {
        match self.lookup(key) {
            Some(ctor) => Ok(ctor()),
            None => Err(PatternError::unrecognized_category(key, self.keys())),
        }
    }

    fn lookup(&self, key: &str) -> Option<fn() -> C> {
        let key = key.trim();
        self.entries
            .iter()
            .find(|(registered, _)| registered.eq_ignore_ascii_case(key))
            .map(|(_, ctor)| *ctor)
    }
}

impl<C> Default for Dispatcher<C> {
    fn default() -> Self {
        Self::new()
    }
}

fn cheese() -> Box<dyn Restaurant> {
    Box::new(CheeseRestaurant)
}

fn chicken() -> Box<dyn Restaurant> {
    Box::new(ChickenRestaurant)
}

fn beef() -> Box<dyn Restaurant> {
    Box::new(BeefRestaurant)
}

/// One restaurant type per burger kind.
pub fn restaurants() -> Dispatcher<Box<dyn Restaurant>> {
    Dispatcher::new()
        .register("cheese", cheese)
        .register("chicken", chicken)
        .register("beef", beef)
}

fn cheese_record() -> Box<dyn Restaurant> {
    Box::new(RecordRestaurant::cheese())
}

fn chicken_record() -> Box<dyn Restaurant> {
    Box::new(RecordRestaurant::chicken())
}

fn beef_record() -> Box<dyn Restaurant> {
    Box::new(RecordRestaurant::beef())
}

/// The same kinds backed by [`RecordRestaurant`] values.
pub fn record_restaurants() -> Dispatcher<Box<dyn Restaurant>> {
    Dispatcher::new()
        .register("cheese", cheese_record)
        .register("chicken", chicken_record)
        .register("beef", beef_record)
}
