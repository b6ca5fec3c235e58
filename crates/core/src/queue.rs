//! The triage queue.
//!
//! Encounters leave the queue most urgent first. Among encounters of the same risk, the one that
//! arrived earliest leaves first, and if two arrivals carry the same stamp (possible when they
//! come from different clocks) the one inserted first wins. The insertion counter is part of the
//! heap key, so the order never depends on how `BinaryHeap` treats equal elements.

use crate::{EmptyQueueError, Encounter};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use triage_uuid::ArrivalStamp;

/// Heap entry: an encounter plus the position it was inserted at.
#[derive(Debug)]
struct Queued {
    seq: u64,
    encounter: Encounter,
}

impl Queued {
    fn key(&self) -> (u8, Reverse<ArrivalStamp>, Reverse<u64>) {
        (
            self.encounter.risk().rank(),
            Reverse(self.encounter.entry()),
            Reverse(self.seq),
        )
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Priority queue of encounters waiting to be seen. Unbounded.
#[derive(Debug, Default)]
pub struct TriageQueue {
    heap: BinaryHeap<Queued>,
    next_seq: u64,
}

impl TriageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an encounter. O(log n).
    pub fn insert(&mut self, encounter: Encounter) {
        let seq = self.next_seq;
        self.next_seq += 1;

        tracing::debug!(
            encounter = %encounter.id(),
            risk = %encounter.risk(),
            seq,
            "encounter queued"
        );
        self.heap.push(Queued { seq, encounter });
    }

    /// Removes and returns the most urgent encounter.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyQueueError`] if nobody is waiting; the queue is left untouched.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Encounter, EmptyQueueError> {
        let queued = self.heap.pop().ok_or(EmptyQueueError)?;
        tracing::debug!(encounter = %queued.encounter.id(), seq = queued.seq, "encounter called");
        Ok(queued.encounter)
    }

    /// The encounter [`TriageQueue::next`] would return, without removing it.
    pub fn peek(&self) -> Option<&Encounter> {
        self.heap.peek().map(|queued| &queued.encounter)
    }

    pub fn size(&self) -> usize {
        self.heap.len()
    }

    pub fn has_next(&self) -> bool {
        !self.heap.is_empty()
    }

    /// Pops every encounter in service order.
    ///
    /// Encounters not consumed by the iterator stay in the queue.
    pub fn drain_ordered(&mut self) -> impl Iterator<Item = Encounter> + '_ {
        std::iter::from_fn(move || self.next().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MSG_EMPTY_QUEUE;
    use crate::{Patient, PatientRegistry, RiskLevel};
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::sync::Arc;
    use triage_uuid::ArrivalClock;

    struct Fixture {
        registry: PatientRegistry,
        clock: ArrivalClock,
        next_cpf: u64,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                registry: PatientRegistry::new(),
                clock: ArrivalClock::new(),
                next_cpf: 10_000_000_000,
            }
        }

        fn patient(&mut self, name: &str) -> Arc<Patient> {
            let cpf = self.next_cpf.to_string();
            self.next_cpf += 1;
            Arc::new(
                Patient::register_on(
                    &mut self.registry,
                    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
                    name,
                    cpf,
                    "paciente@example.com",
                    "01/01/1990",
                )
                .unwrap(),
            )
        }

        fn encounter(&mut self, name: &str, risk: RiskLevel) -> Encounter {
            let patient = self.patient(name);
            Encounter::new(Some(patient), risk, &self.clock).unwrap()
        }
    }

    #[test]
    fn higher_risk_is_served_first() {
        let mut fx = Fixture::new();
        let mut queue = TriageQueue::new();

        queue.insert(fx.encounter("Amarelo", RiskLevel::Yellow));
        queue.insert(fx.encounter("Vermelho", RiskLevel::Red));

        assert_eq!(queue.size(), 2);
        assert_eq!(queue.next().unwrap().risk(), RiskLevel::Red);
        assert_eq!(queue.size(), 1);
        assert_eq!(queue.next().unwrap().risk(), RiskLevel::Yellow);
        assert_eq!(queue.size(), 0);
    }

    #[test]
    fn equal_risk_is_first_come_first_served() {
        let mut fx = Fixture::new();
        let mut queue = TriageQueue::new();

        queue.insert(fx.encounter("João Silva", RiskLevel::Green));
        queue.insert(fx.encounter("Maria Oliveira", RiskLevel::Green));

        assert_eq!(queue.next().unwrap().patient().name(), "João Silva");
        assert_eq!(queue.next().unwrap().patient().name(), "Maria Oliveira");
    }

    #[test]
    fn identical_stamps_fall_back_to_insertion_order() {
        let mut fx = Fixture::new();
        let mut queue = TriageQueue::new();
        let at = ArrivalStamp::new(Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap());

        let a = fx.patient("A");
        let b = fx.patient("B");
        let first = Encounter::with_entry(Some(a), RiskLevel::Yellow, at).unwrap();
        let second = Encounter::with_entry(Some(b), RiskLevel::Yellow, at).unwrap();

        queue.insert(second);
        queue.insert(first);

        assert_eq!(queue.next().unwrap().patient().name(), "B");
        assert_eq!(queue.next().unwrap().patient().name(), "A");
    }

    #[test]
    fn earlier_arrival_beats_earlier_insertion() {
        let mut fx = Fixture::new();
        let mut queue = TriageQueue::new();

        let early = fx.encounter("Chegou antes", RiskLevel::Green);
        let late = fx.encounter("Chegou depois", RiskLevel::Green);

        queue.insert(late);
        queue.insert(early);

        assert_eq!(queue.next().unwrap().patient().name(), "Chegou antes");
    }

    #[test]
    fn empty_queue_fails_without_changing_size() {
        let mut queue = TriageQueue::new();

        let err = queue.next().unwrap_err();

        assert_eq!(err, EmptyQueueError);
        assert_eq!(err.to_string(), MSG_EMPTY_QUEUE);
        assert_eq!(queue.size(), 0);
        assert!(!queue.has_next());
        assert!(queue.next().is_err());
    }

    #[test]
    fn has_next_tracks_size() {
        let mut fx = Fixture::new();
        let mut queue = TriageQueue::new();
        assert!(!queue.has_next());

        queue.insert(fx.encounter("João Silva", RiskLevel::Green));
        assert!(queue.has_next());
        assert_eq!(queue.size(), 1);

        queue.next().unwrap();
        assert!(!queue.has_next());
        assert_eq!(queue.size(), 0);
    }

    #[test]
    fn peek_does_not_remove() {
        let mut fx = Fixture::new();
        let mut queue = TriageQueue::new();
        assert!(queue.peek().is_none());

        queue.insert(fx.encounter("Verde", RiskLevel::Green));
        queue.insert(fx.encounter("Vermelho", RiskLevel::Red));

        assert_eq!(queue.peek().map(Encounter::risk), Some(RiskLevel::Red));
        assert_eq!(queue.size(), 2);
    }

    #[test]
    fn mixed_risks_drain_in_priority_then_arrival_order() {
        let mut fx = Fixture::new();
        let mut queue = TriageQueue::new();

        let arrivals = [
            ("p0", RiskLevel::Green),
            ("p1", RiskLevel::Red),
            ("p2", RiskLevel::Blue),
            ("p3", RiskLevel::Yellow),
            ("p4", RiskLevel::Red),
            ("p5", RiskLevel::Green),
            ("p6", RiskLevel::Yellow),
            ("p7", RiskLevel::Blue),
        ];
        for (name, risk) in arrivals {
            queue.insert(fx.encounter(name, risk));
        }

        let order: Vec<String> = queue
            .drain_ordered()
            .map(|e| e.patient().name().to_string())
            .collect();

        assert_eq!(order, ["p1", "p4", "p3", "p6", "p0", "p5", "p2", "p7"]);
        assert!(!queue.has_next());
    }

    #[test]
    fn partially_consumed_drain_leaves_the_rest() {
        let mut fx = Fixture::new();
        let mut queue = TriageQueue::new();
        for risk in [RiskLevel::Green, RiskLevel::Red, RiskLevel::Yellow] {
            queue.insert(fx.encounter("x", risk));
        }

        let first = queue.drain_ordered().next().unwrap();

        assert_eq!(first.risk(), RiskLevel::Red);
        assert_eq!(queue.size(), 2);
    }
}
