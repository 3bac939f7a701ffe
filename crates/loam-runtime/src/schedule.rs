use std::collections::{BTreeMap, VecDeque};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scheduled<E> {
    pub id: u64,
    pub tick: u64,
    pub kind: E,
}

/// Delayed one-shot events keyed by trigger tick, FIFO within a tick.
#[derive(Debug)]
pub struct EventQueue<E> {
    // map of tick -> FIFO queue of events
    by_tick: BTreeMap<u64, VecDeque<Scheduled<E>>>,
    next_id: u64,
    len: usize,
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self {
            by_tick: BTreeMap::new(),
            next_id: 1,
            len: 0,
        }
    }
}

impl<E> EventQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    pub fn emit_at(&mut self, tick: u64, kind: E) -> u64 {
        let id = self.alloc_id();
        self.by_tick
            .entry(tick)
            .or_default()
            .push_back(Scheduled { id, tick, kind });
        self.len += 1;
        id
    }

    pub fn emit_after(&mut self, now: u64, delta: u64, kind: E) -> u64 {
        self.emit_at(now.saturating_add(delta), kind)
    }

    /// Oldest event whose trigger tick is `<= now`.
    pub fn pop_due(&mut self, now: u64) -> Option<Scheduled<E>> {
        let mut entry = self.by_tick.first_entry()?;
        if *entry.key() > now {
            return None;
        }
        let ev = entry.get_mut().pop_front();
        if entry.get().is_empty() {
            entry.remove();
        }
        if ev.is_some() {
            self.len -= 1;
        }
        ev
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_tick_then_fifo_order() {
        let mut q = EventQueue::new();
        q.emit_at(5, "b");
        q.emit_at(3, "a");
        q.emit_at(5, "c");
        assert_eq!(q.pop_due(2), None);
        assert_eq!(q.pop_due(10).map(|e| e.kind), Some("a"));
        assert_eq!(q.pop_due(10).map(|e| e.kind), Some("b"));
        assert_eq!(q.pop_due(10).map(|e| e.kind), Some("c"));
        assert!(q.is_empty());
        assert_eq!(q.pop_due(u64::MAX), None);
    }

    #[test]
    fn emit_after_offsets_from_now() {
        let mut q = EventQueue::new();
        let id = q.emit_after(100, 1800, ());
        assert_eq!(q.pop_due(1899), None);
        let ev = q.pop_due(1900).map(|e| (e.id, e.tick));
        assert_eq!(ev, Some((id, 1900)));
    }
}
