// WHY: word-position index backing search and replace
// Plain unbalanced BST; every traversal uses an explicit stack so sorted input cannot blow the call stack

use std::cmp::Ordering;
use std::fmt;

/// One indexed word and the lines it occurs on
///
/// Nodes are only reachable by reference from a [`WordIndex`]; they are not
/// `Clone` so a subtree can never be detached from the iterative teardown.
pub struct WordNode {
    key: String,
    positions: Vec<usize>,
    left: Option<Box<WordNode>>,
    right: Option<Box<WordNode>>,
}

impl WordNode {
    fn new(key: String, line_number: usize) -> Self {
        Self {
            key,
            positions: vec![line_number],
            left: None,
            right: None,
        }
    }

    /// Lowercased, punctuation-stripped word this node is keyed by
    pub fn word(&self) -> &str {
        &self.key
    }

    /// Line numbers in first-seen order, each at most once
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    fn add_position(&mut self, line_number: usize) {
        // WHY: per-word occurrence lists are short, a linear scan keeps insertion order intact
        if !self.positions.contains(&line_number) {
            self.positions.push(line_number);
        }
    }
}

impl fmt::Debug for WordNode {
    // children are left out so formatting never descends the tree
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordNode")
            .field("key", &self.key)
            .field("positions", &self.positions)
            .finish_non_exhaustive()
    }
}

/// Binary search tree of words keyed by lowercase text
#[derive(Default)]
pub struct WordIndex {
    root: Option<Box<WordNode>>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Record that `word` occurs on `line_number`
    ///
    /// Callers pass cleaned words; the key is lowercased here as well so that
    /// lookups through [`WordIndex::search`] always agree with stored keys.
    /// Empty words are ignored.
    pub fn insert(&mut self, word: &str, line_number: usize) {
        if word.is_empty() {
            return;
        }
        let key = word.to_lowercase();

        let mut link = &mut self.root;
        while let Some(node) = link {
            match key.as_str().cmp(node.key.as_str()) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => {
                    node.add_position(line_number);
                    return;
                }
            }
        }
        *link = Some(Box::new(WordNode::new(key, line_number)));
    }

    /// Find the node for `word`, compared case-insensitively
    pub fn search(&self, word: &str) -> Option<&WordNode> {
        let key = word.to_lowercase();
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            current = match key.as_str().cmp(node.key.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    pub fn contains(&self, word: &str) -> bool {
        self.search(word).is_some()
    }

    /// Number of distinct words, counted by walking the whole tree
    pub fn unique_word_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&WordNode> = self.root.as_deref().into_iter().collect();

        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        count
    }

    /// Nodes on the longest root-to-leaf path; 0 for an empty tree
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&WordNode, usize)> = self
            .root
            .as_deref()
            .map(|root| (root, 1))
            .into_iter()
            .collect();

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1));
            }
        }
        height
    }

    /// Ascending traversal of `(word, positions)` pairs
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref())
    }
}

impl Drop for WordIndex {
    fn drop(&mut self) {
        // WHY: the default recursive drop would overflow on a degenerate tree
        let mut stack: Vec<Box<WordNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl fmt::Debug for WordIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a WordIndex {
    type Item = (&'a str, &'a [usize]);
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy in-order iterator over a [`WordIndex`]
pub struct InOrder<'a> {
    stack: Vec<&'a WordNode>,
}

impl<'a> InOrder<'a> {
    fn new(root: Option<&'a WordNode>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a WordNode>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = (&'a str, &'a [usize]);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some((node.key.as_str(), node.positions.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(pairs: &[(&str, usize)]) -> WordIndex {
        let mut index = WordIndex::new();
        for (word, line) in pairs {
            index.insert(word, *line);
        }
        index
    }

    #[test]
    fn test_empty_index() {
        let index = WordIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.unique_word_count(), 0);
        assert_eq!(index.height(), 0);
        assert!(index.search("anything").is_none());
        assert_eq!(index.iter().count(), 0);
    }

    #[test]
    fn test_insert_and_search() {
        let index = index_of(&[("hello", 1), ("world", 1), ("hello", 3)]);

        let node = index.search("hello").expect("hello should be indexed");
        assert_eq!(node.word(), "hello");
        assert_eq!(node.positions(), &[1, 3]);
        assert!(index.contains("world"));
        assert!(!index.contains("missing"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let index = index_of(&[("java", 3)]);
        assert!(index.contains("Java"));
        assert!(index.contains("JAVA"));
        assert_eq!(index.search("jAvA").map(|n| n.positions().to_vec()), Some(vec![3]));
    }

    #[test]
    fn test_insert_lowercases_key() {
        let index = index_of(&[("Hello", 1), ("hello", 2)]);
        assert_eq!(index.unique_word_count(), 1);
        assert_eq!(index.search("hello").unwrap().positions(), &[1, 2]);
    }

    #[test]
    fn test_duplicate_line_recorded_once() {
        let index = index_of(&[("the", 2), ("the", 2), ("the", 5), ("the", 2)]);
        assert_eq!(index.search("the").unwrap().positions(), &[2, 5]);
    }

    #[test]
    fn test_positions_keep_insertion_order() {
        let index = index_of(&[("word", 7), ("word", 2), ("word", 9)]);
        assert_eq!(index.search("word").unwrap().positions(), &[7, 2, 9]);
    }

    #[test]
    fn test_empty_word_ignored() {
        let index = index_of(&[("", 1)]);
        assert!(index.is_empty());
    }

    #[test]
    fn test_in_order_is_sorted_for_any_insertion_order() {
        let words = ["mango", "apple", "zebra", "kiwi", "banana", "cherry", "apple", "yam"];
        let orderings: Vec<Vec<&str>> = vec![
            words.to_vec(),
            words.iter().rev().copied().collect(),
            {
                let mut sorted = words.to_vec();
                sorted.sort();
                sorted
            },
        ];

        for ordering in orderings {
            let mut index = WordIndex::new();
            for (i, word) in ordering.iter().enumerate() {
                index.insert(word, i + 1);
            }

            let keys: Vec<&str> = index.iter().map(|(word, _)| word).collect();
            assert!(keys.windows(2).all(|pair| pair[0] < pair[1]), "keys not ascending: {keys:?}");
            assert_eq!(keys.len(), index.unique_word_count());
            assert_eq!(keys.len(), 7);
        }
    }

    #[test]
    fn test_iteration_is_restartable() {
        let index = index_of(&[("b", 1), ("a", 2), ("c", 3)]);
        let first: Vec<_> = index.iter().collect();
        let second: Vec<_> = (&index).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first[0], ("a", &[2][..]));
    }

    #[test]
    fn test_height() {
        // balanced: m at root, f and t below
        let balanced = index_of(&[("m", 1), ("f", 1), ("t", 1)]);
        assert_eq!(balanced.height(), 2);

        let chain = index_of(&[("a", 1), ("b", 1), ("c", 1), ("d", 1)]);
        assert_eq!(chain.height(), 4);

        let single = index_of(&[("only", 1)]);
        assert_eq!(single.height(), 1);
    }

    #[test]
    fn test_sorted_input_does_not_overflow() {
        let mut index = WordIndex::new();
        let count = 20_000;
        for i in 0..count {
            index.insert(&format!("w{i:06}"), i + 1);
        }

        assert_eq!(index.unique_word_count(), count);
        assert_eq!(index.height(), count);
        assert_eq!(index.iter().count(), count);
        assert!(index.contains("w019999"));
        drop(index);
    }

    #[test]
    fn test_debug_does_not_descend_into_children() {
        let mut index = WordIndex::new();
        let count = 20_000;
        for i in 0..count {
            index.insert(&format!("w{i:06}"), i + 1);
        }

        let root = index.search("w000000").expect("first word is the root");
        assert_eq!(format!("{root:?}"), r#"WordNode { key: "w000000", positions: [1], .. }"#);

        let rendered = format!("{index:?}");
        assert!(rendered.starts_with(r#"{"w000000": [1], "w000001": [2]"#));
        assert!(rendered.ends_with(r#""w019999": [20000]}"#));
    }

    #[test]
    fn test_debug_small_index() {
        let index = index_of(&[("b", 1), ("a", 2), ("b", 3)]);
        assert_eq!(format!("{index:?}"), r#"{"a": [2], "b": [1, 3]}"#);
        assert_eq!(format!("{:?}", WordIndex::new()), "{}");
    }
}
