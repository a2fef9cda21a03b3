//! Physics stepper - one frame of glyph physics
//!
//! A frame runs three passes over the body collection, in order:
//! 1. `integrate` - gravity, floor/wall/ceiling response, speed cap
//!    (per body, no cross-body reads; runs on rayon with `parallel`)
//! 2. `collision` - pairwise circle contacts, `i < j` in insertion order,
//!    mutated in place so later pairs see earlier corrections
//! 3. `settle` - re-confine each unsettled body and freeze the ones at rest

mod collision;
mod integrate;
mod settle;

pub use collision::{contact_between, resolve_pair, resolve_pairs, Contact, PairOutcome};
pub use integrate::{integrate_all, integrate_body};
pub use settle::{confine, is_at_rest, settle_pass};

/// Counters gathered while integrating
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntegrateCounters {
    pub stepped: u32,
    pub floor_contacts: u32,
    pub settled: u32,
}

impl IntegrateCounters {
    pub fn merge(self, other: Self) -> Self {
        Self {
            stepped: self.stepped + other.stepped,
            floor_contacts: self.floor_contacts + other.floor_contacts,
            settled: self.settled + other.settled,
        }
    }
}

/// Counters gathered while resolving pairs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionCounters {
    pub pair_checks: u32,
    pub contacts: u32,
    pub impulses: u32,
}
