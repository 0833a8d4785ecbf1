//! A stable priority queue.

use std::collections::VecDeque;

/// An element waiting in a [PriorityQueue].
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T, P> {
    pub element: T,
    pub priority: P,
}

/// Priority queue which always yields the lowest priority first.
///
/// Entries are kept sorted, and inserting scans for the first entry with
/// a strictly larger priority. Entries with equal priority therefore come
/// out in the order they went in.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P> {
    items: VecDeque<Entry<T, P>>,
}

impl<T, P> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        PriorityQueue {
            items: VecDeque::new(),
        }
    }
}

impl<T, P> PriorityQueue<T, P>
where
    P: PartialOrd,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, element: T, priority: P) {
        let entry = Entry { element, priority };
        match self
            .items
            .iter()
            .position(|item| entry.priority < item.priority)
        {
            Some(index) => self.items.insert(index, entry),
            None => self.items.push_back(entry),
        }
    }

    /// Remove the lowest priority entry, if there is one.
    pub fn dequeue(&mut self) -> Option<Entry<T, P>> {
        self.items.pop_front()
    }

    pub fn peek(&self) -> Option<&Entry<T, P>> {
        self.items.front()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lowest_priority_first_with_stable_ties() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("five", 5);
        queue.enqueue("three-a", 3);
        queue.enqueue("three-b", 3);
        queue.enqueue("one", 1);

        let order: Vec<(&str, i32)> = std::iter::from_fn(|| queue.dequeue())
            .map(|e| (e.element, e.priority))
            .collect();
        assert_eq!(
            order,
            vec![("one", 1), ("three-a", 3), ("three-b", 3), ("five", 5)]
        );
    }

    #[test]
    fn fractional_priorities() {
        let mut queue = PriorityQueue::new();
        queue.enqueue('b', 2.5);
        queue.enqueue('a', 0.5);
        queue.enqueue('c', 2.5);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek().map(|e| e.element), Some('a'));
        assert_eq!(queue.dequeue().map(|e| e.element), Some('a'));
        assert_eq!(queue.dequeue().map(|e| e.element), Some('b'));
        assert_eq!(queue.dequeue().map(|e| e.element), Some('c'));
    }

    #[test]
    fn empty_queue_dequeues_nothing() {
        let mut queue: PriorityQueue<(), u32> = PriorityQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }
}
