//! LRU Tracker Module
//!
//! Recency ordering for cache eviction, kept as a doubly-linked list inside a
//! `Vec` arena. Links are indices, freed slots are recycled through a free
//! list, and every operation is O(1).

/// Null link.
const NIL: usize = usize::MAX;

// == Node Handle ==
/// Handle to a key's position in the tracker.
///
/// Only valid until the key is removed or evicted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node {
    /// `None` while the slot sits on the free list
    key: Option<String>,
    prev: usize,
    next: usize,
}

// == LRU Tracker ==
/// Tracks access order for LRU eviction.
///
/// - Head = most recently used
/// - Tail = least recently used
#[derive(Debug)]
pub struct LruTracker {
    nodes: Vec<Node>,
    head: usize,
    tail: usize,
    /// Head of the free-slot chain (linked through `next`)
    free: usize,
    len: usize,
}

impl Default for LruTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty tracker with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            head: NIL,
            tail: NIL,
            free: NIL,
            len: 0,
        }
    }

    // == Insert ==
    /// Adds a key as the most recently used and returns its handle.
    ///
    /// The caller guarantees the key is not already tracked.
    pub fn insert(&mut self, key: String) -> NodeId {
        let idx = if self.free != NIL {
            let idx = self.free;
            self.free = self.nodes[idx].next;
            self.nodes[idx] = Node {
                key: Some(key),
                prev: NIL,
                next: NIL,
            };
            idx
        } else {
            self.nodes.push(Node {
                key: Some(key),
                prev: NIL,
                next: NIL,
            });
            self.nodes.len() - 1
        };

        self.link_front(idx);
        self.len += 1;
        NodeId(idx)
    }

    // == Touch ==
    /// Marks a tracked key as most recently used.
    pub fn touch(&mut self, id: NodeId) {
        let idx = id.0;
        if self.head == idx {
            return;
        }
        self.unlink(idx);
        self.link_front(idx);
    }

    // == Remove ==
    /// Stops tracking a key and returns it.
    pub fn remove(&mut self, id: NodeId) -> Option<String> {
        let idx = id.0;
        let key = self.nodes.get_mut(idx)?.key.take()?;
        self.unlink(idx);
        self.nodes[idx].next = self.free;
        self.free = idx;
        self.len -= 1;
        Some(key)
    }

    // == Pop Oldest ==
    /// Removes and returns the least recently used key.
    pub fn pop_oldest(&mut self) -> Option<String> {
        if self.tail == NIL {
            return None;
        }
        self.remove(NodeId(self.tail))
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&str> {
        self.key_at(self.tail)
    }

    /// Returns the key a handle refers to.
    pub fn key(&self, id: NodeId) -> Option<&str> {
        self.key_at(id.0)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Keys from least to most recently used.
    pub fn iter_oldest_first(&self) -> impl Iterator<Item = &str> + '_ {
        let mut cursor = self.tail;
        std::iter::from_fn(move || {
            let key = self.key_at(cursor)?;
            cursor = self.nodes[cursor].prev;
            Some(key)
        })
    }

    fn key_at(&self, idx: usize) -> Option<&str> {
        self.nodes.get(idx).and_then(|n| n.key.as_deref())
    }

    fn link_front(&mut self, idx: usize) {
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = self.head;
        if self.head != NIL {
            self.nodes[self.head].prev = idx;
        }
        self.head = idx;
        if self.tail == NIL {
            self.tail = idx;
        }
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);

        if prev != NIL {
            self.nodes[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.nodes[next].prev = prev;
        } else {
            self.tail = prev;
        }

        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = NIL;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn order(lru: &LruTracker) -> Vec<&str> {
        lru.iter_oldest_first().collect()
    }

    #[test]
    fn test_lru_new() {
        let lru = LruTracker::new();
        assert!(lru.is_empty());
        assert_eq!(lru.len(), 0);
        assert_eq!(lru.peek_oldest(), None);
    }

    #[test]
    fn test_lru_insert_order() {
        let mut lru = LruTracker::new();

        lru.insert("key1".to_string());
        lru.insert("key2".to_string());
        lru.insert("key3".to_string());

        assert_eq!(lru.len(), 3);
        // key1 is oldest (added first)
        assert_eq!(lru.peek_oldest(), Some("key1"));
        assert_eq!(order(&lru), vec!["key1", "key2", "key3"]);
    }

    #[test]
    fn test_lru_touch_moves_to_front() {
        let mut lru = LruTracker::new();

        let a = lru.insert("a".to_string());
        lru.insert("b".to_string());
        lru.insert("c".to_string());

        lru.touch(a);

        assert_eq!(lru.peek_oldest(), Some("b"));
        assert_eq!(lru.pop_oldest(), Some("b".to_string()));
        assert_eq!(lru.pop_oldest(), Some("c".to_string()));
        assert_eq!(lru.pop_oldest(), Some("a".to_string()));
        assert!(lru.is_empty());
    }

    #[test]
    fn test_lru_touch_head_is_noop() {
        let mut lru = LruTracker::new();

        lru.insert("a".to_string());
        let b = lru.insert("b".to_string());
        lru.touch(b);
        lru.touch(b);

        assert_eq!(order(&lru), vec!["a", "b"]);
    }

    #[test]
    fn test_lru_touch_middle_and_tail() {
        let mut lru = LruTracker::new();

        let a = lru.insert("a".to_string());
        let b = lru.insert("b".to_string());
        let c = lru.insert("c".to_string());

        // touch(b): a, c, b
        lru.touch(b);
        assert_eq!(order(&lru), vec!["a", "c", "b"]);
        // touch(a): c, b, a
        lru.touch(a);
        assert_eq!(order(&lru), vec!["c", "b", "a"]);
        // touch(c): b, a, c
        lru.touch(c);
        assert_eq!(order(&lru), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_lru_pop_empty() {
        let mut lru = LruTracker::new();
        assert_eq!(lru.pop_oldest(), None);
    }

    #[test]
    fn test_lru_remove() {
        let mut lru = LruTracker::new();

        lru.insert("key1".to_string());
        let k2 = lru.insert("key2".to_string());
        lru.insert("key3".to_string());

        assert_eq!(lru.remove(k2), Some("key2".to_string()));

        assert_eq!(lru.len(), 2);
        assert_eq!(order(&lru), vec!["key1", "key3"]);
    }

    #[test]
    fn test_lru_remove_twice_returns_none() {
        let mut lru = LruTracker::new();

        let k = lru.insert("key".to_string());
        assert!(lru.remove(k).is_some());
        assert!(lru.remove(k).is_none());
        assert_eq!(lru.len(), 0);
    }

    #[test]
    fn test_lru_only_node_removal_clears_ends() {
        let mut lru = LruTracker::new();

        let k = lru.insert("only".to_string());
        lru.remove(k);

        assert_eq!(lru.peek_oldest(), None);
        assert_eq!(order(&lru), Vec::<&str>::new());

        lru.insert("next".to_string());
        assert_eq!(lru.peek_oldest(), Some("next"));
    }

    #[test]
    fn test_lru_reuses_freed_slots() {
        let mut lru = LruTracker::with_capacity(2);

        let a = lru.insert("a".to_string());
        lru.insert("b".to_string());
        lru.remove(a);
        let c = lru.insert("c".to_string());

        assert_eq!(c, a, "freed slot should be recycled");
        assert_eq!(lru.nodes.len(), 2);
        assert_eq!(lru.key(c), Some("c"));
        assert_eq!(order(&lru), vec!["b", "c"]);
    }
}
