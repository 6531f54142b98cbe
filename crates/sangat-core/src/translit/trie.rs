use std::collections::HashMap;

#[derive(Debug)]
struct Node<V> {
    children: HashMap<u8, Node<V>>,
    value: Option<V>,
}

impl<V> Node<V> {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            value: None,
        }
    }
}

/// Byte trie over ASCII tokens, answering "longest token that prefixes the
/// input here".
#[derive(Debug)]
pub struct TokenTrie<V> {
    root: Node<V>,
    len: usize,
}

impl<V> Default for TokenTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TokenTrie<V> {
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            len: 0,
        }
    }

    /// Insert a token. A later insert of the same token replaces the value.
    pub fn insert(&mut self, token: &str, value: V) {
        let mut node = &mut self.root;
        for &b in token.as_bytes() {
            node = node.children.entry(b).or_insert_with(Node::new);
        }
        if node.value.replace(value).is_none() {
            self.len += 1;
        }
    }

    /// Longest token that is a prefix of `input`, as `(byte_len, value)`.
    pub fn longest_match(&self, input: &[u8]) -> Option<(usize, &V)> {
        let mut node = &self.root;
        let mut best = None;
        for (i, b) in input.iter().enumerate() {
            match node.children.get(b) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(v) = &node.value {
                best = Some((i + 1, v));
            }
        }
        best
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
