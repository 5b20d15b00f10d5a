//! Instrumented payloads shared by the integration tests.
//!
//! A [`Probe`] records its construction, cloning, clone-assignment and drop
//! into a [`Ledger`], so tests can check both the order of lifecycle events
//! and that constructions and drops balance.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

/// Which alternative a probe was created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Expected,
    Unexpected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Constructed(Side, u32),
    Cloned(Side, u32),
    CloneAssigned(Side, u32),
    Dropped(Side, u32),
}

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    events: Rc<RefCell<Vec<Event>>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn probe(&self, side: Side, id: u32) -> Probe {
        self.record(Event::Constructed(side, id));
        Probe {
            side,
            id,
            ledger: self.clone(),
        }
    }

    pub fn expected(&self, id: u32) -> Probe {
        self.probe(Side::Expected, id)
    }

    pub fn unexpected(&self, id: u32) -> Probe {
        self.probe(Side::Unexpected, id)
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Constructions (including clones) recorded for `side`.
    pub fn constructed(&self, side: Side) -> usize {
        self.count(|event| {
            matches!(event, Event::Constructed(recorded, _) | Event::Cloned(recorded, _) if *recorded == side)
        })
    }

    pub fn dropped(&self, side: Side) -> usize {
        self.count(|event| matches!(event, Event::Dropped(recorded, _) if *recorded == side))
    }

    pub fn live(&self, side: Side) -> usize {
        self.constructed(side) - self.dropped(side)
    }

    fn count(&self, predicate: impl Fn(&Event) -> bool) -> usize {
        self.events.borrow().iter().filter(|event| predicate(event)).count()
    }

    fn record(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

#[derive(Debug)]
pub struct Probe {
    pub side: Side,
    pub id: u32,
    ledger: Ledger,
}

impl Clone for Probe {
    fn clone(&self) -> Self {
        self.ledger.record(Event::Cloned(self.side, self.id));
        Self {
            side: self.side,
            id: self.id,
            ledger: self.ledger.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.id = source.id;
        self.ledger.record(Event::CloneAssigned(self.side, source.id));
    }
}

impl PartialEq for Probe {
    fn eq(&self, other: &Self) -> bool {
        self.side == other.side && self.id == other.id
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        self.ledger.record(Event::Dropped(self.side, self.id));
    }
}
