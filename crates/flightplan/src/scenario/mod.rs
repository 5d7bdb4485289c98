//! Theaters: named airbases the caller plans strikes between.
//!
//! The default theater is the three-airfield demo map (Anapa, Mozdok, Nalchik).
//! Moving an airbase returns a new theater; planners never see the theater itself,
//! only the two airbase snapshots handed to `strike`.

pub mod rand;

use crate::airbase::Airbase;
use crate::geom::Point;

#[derive(Clone, Debug, PartialEq)]
pub struct Theater {
    bases: Vec<(String, Airbase)>,
}

pub const ANAPA: &str = "anapa";
pub const MOZDOK: &str = "mozdok";
pub const NALCHIK: &str = "nalchik";

fn anapa() -> Airbase {
    Airbase::friendly(Point::from_nm(20.0, 20.0))
}

fn mozdok() -> Airbase {
    Airbase::hostile(Point::from_nm(120.0, 120.0))
}

fn nalchik() -> Airbase {
    Airbase::hostile(Point::from_nm(120.0, 20.0))
}

impl Default for Theater {
    fn default() -> Self {
        Self::new()
            .with(ANAPA, anapa())
            .with(MOZDOK, mozdok())
            .with(NALCHIK, nalchik())
    }
}

impl Theater {
    /// Empty theater.
    pub fn new() -> Self {
        Self { bases: Vec::new() }
    }

    /// Add or replace an airbase.
    pub fn with(mut self, name: &str, base: Airbase) -> Self {
        match self.bases.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = base,
            None => self.bases.push((name.to_string(), base)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<Airbase> {
        self.bases.iter().find(|(n, _)| n == name).map(|(_, b)| *b)
    }

    /// Copy of this theater with `name` relocated. `None` if no such airbase.
    pub fn moved(&self, name: &str, position: Point) -> Option<Self> {
        let base = self.get(name)?;
        Some(self.clone().with(name, base.moved_to(position)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Airbase)> + '_ {
        self.bases.iter().map(|(n, b)| (n.as_str(), *b))
    }

    /// The demo strike: Anapa attacking Mozdok.
    pub fn default_strike() -> (Airbase, Airbase) {
        (anapa(), mozdok())
    }
}
