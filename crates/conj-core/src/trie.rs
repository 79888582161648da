//! Prefix tree over code-point sequences.
//!
//! Nodes live in a single arena and refer to their children by index, so the
//! whole tree is released at once when the `Trie` is dropped. Node 0 stands
//! for the empty key.

use std::mem;

type NodeId = u32;

const ROOT: NodeId = 0;

struct Node<T> {
    /// Child edges in insertion order. Fan-out is small for natural-language
    /// keys, so a linear scan beats hashing here.
    children: Vec<(char, NodeId)>,
    value: Option<T>,
}

impl<T> Node<T> {
    fn new() -> Self {
        Self {
            children: Vec::new(),
            value: None,
        }
    }

    fn child(&self, c: char) -> Option<NodeId> {
        self.children
            .iter()
            .find_map(|&(label, id)| (label == c).then_some(id))
    }
}

pub struct Trie<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Trie<T> {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
        }
    }

    /// Value slot for `key`, creating the path to it if needed.
    pub fn insert_or_get(&mut self, key: &[char]) -> &mut Option<T> {
        let mut node = ROOT;
        for &c in key {
            node = match self.nodes[node as usize].child(c) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len() as NodeId;
                    self.nodes.push(Node::new());
                    self.nodes[node as usize].children.push((c, next));
                    next
                }
            };
        }
        &mut self.nodes[node as usize].value
    }

    /// Value for `key`, inserting `T::default()` first if the slot is empty.
    pub fn entry_or_default(&mut self, key: &[char]) -> &mut T
    where
        T: Default,
    {
        self.insert_or_get(key).get_or_insert_with(T::default)
    }

    pub fn get(&self, key: &[char]) -> Option<&T> {
        let mut node = ROOT;
        for &c in key {
            node = self.nodes[node as usize].child(c)?;
        }
        self.nodes[node as usize].value.as_ref()
    }

    /// Every prefix of `key` that carries a value, shortest first.
    ///
    /// Items are `(index, value)` where `key[..index]` is the matched prefix.
    /// The empty prefix comes first when it has a value.
    pub fn prefixes<'t, 'k>(&'t self, key: &'k [char]) -> Prefixes<'t, 'k, T> {
        Prefixes {
            trie: self,
            key,
            node: Some(ROOT),
            index: 0,
        }
    }

    /// Calls `visitor(key, index, value)` for each prefix reported by
    /// [`Trie::prefixes`], in the same order.
    pub fn walk_prefixes<F>(&self, key: &[char], mut visitor: F)
    where
        F: FnMut(&[char], usize, &T),
    {
        for (index, value) in self.prefixes(key) {
            visitor(key, index, value);
        }
    }

    /// Number of keys that carry a value.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.value.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.iter().all(|n| n.value.is_none())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Approximate heap and inline footprint in bytes. `value_cost` reports
    /// the heap bytes owned by one value.
    pub fn memory_usage(&self, value_cost: impl Fn(&T) -> usize) -> usize {
        let arena = mem::size_of::<Self>() + self.nodes.capacity() * mem::size_of::<Node<T>>();
        let edges: usize = self
            .nodes
            .iter()
            .map(|n| n.children.capacity() * mem::size_of::<(char, NodeId)>())
            .sum();
        let values: usize = self
            .nodes
            .iter()
            .filter_map(|n| n.value.as_ref())
            .map(&value_cost)
            .sum();
        arena + edges + values
    }
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy iterator returned by [`Trie::prefixes`].
pub struct Prefixes<'t, 'k, T> {
    trie: &'t Trie<T>,
    key: &'k [char],
    node: Option<NodeId>,
    index: usize,
}

impl<'t, T> Iterator for Prefixes<'t, '_, T> {
    type Item = (usize, &'t T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let id = self.node?;
            let node = &self.trie.nodes[id as usize];
            let index = self.index;
            self.node = match self.key.get(index) {
                Some(&c) => node.child(c),
                None => None,
            };
            self.index += 1;
            if let Some(value) = &node.value {
                return Some((index, value));
            }
        }
    }
}
