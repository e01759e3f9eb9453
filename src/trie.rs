use hashbrown::HashMap;

/// One trie node. Nodes live in the arena owned by `Trie`; `parent` and the
/// values in `children` are arena indices, never pointers, so the trie owns
/// every node while a child can still look back at its parent.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) rune: char,
    pub(crate) eow: bool,
    pub(crate) depth: usize,
    pub(crate) parent: Option<usize>,
    pub(crate) children: HashMap<char, usize>,
    pub(crate) row: Vec<usize>,
}

impl Node {
    fn new(rune: char, depth: usize, parent: Option<usize>, row_len: usize) -> Self {
        Node {
            rune,
            eow: false,
            depth,
            parent,
            children: HashMap::new(),
            row: vec![0; row_len],
        }
    }
}

/// A prefix trie bound to one query word. Every node carries a distance row
/// sized to the query, so the rows can be filled in one pass over the trie
/// (see the `distance` module) once the dictionary is loaded.
#[derive(Debug)]
pub struct Trie {
    pub(crate) nodes: Vec<Node>,
    pub(crate) query: Vec<char>,
    words: usize,
}

impl Trie {
    /// Creates an empty trie whose distance rows are sized to `word`.
    pub fn with_query(word: &str) -> Self {
        let query: Vec<char> = word.chars().collect();
        let root = Node::new('\u{0000}', 0, None, query.len());

        Trie {
            nodes: vec![root],
            query,
            words: 0,
        }
    }

    /// Inserts one dictionary line. Characters are consumed up to the first
    /// whitespace, so a trailing newline or anything past the first token is
    /// ignored. A line that starts with whitespace (or is empty) marks the
    /// root itself as a word end.
    pub fn insert(&mut self, line: &str) {
        let mut curr = 0;

        for rune in line.chars() {
            if rune.is_whitespace() {
                break;
            }

            curr = self.child_or_create(curr, rune);
        }

        self.nodes[curr].eow = true;
        self.words += 1;
    }

    /// Exact lookup: whether `word` was inserted verbatim.
    pub fn contains(&self, word: &str) -> bool {
        let mut curr = 0;

        for rune in word.chars() {
            match self.nodes[curr].children.get(&rune) {
                Some(&child) => curr = child,
                None => return false,
            }
        }

        self.nodes[curr].eow
    }

    /// Number of lines inserted so far.
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// Number of non-root nodes, for diagnostics.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn query_len(&self) -> usize {
        self.query.len()
    }

    fn child_or_create(&mut self, node: usize, rune: char) -> usize {
        if let Some(&child) = self.nodes[node].children.get(&rune) {
            return child;
        }

        let depth = self.nodes[node].depth + 1;
        let row_len = self.query.len();
        let index = self.nodes.len();

        self.nodes.push(Node::new(rune, depth, Some(node), row_len));
        self.nodes[node].children.insert(rune, index);

        index
    }

    /// Rebuilds the word terminating at `index` by walking parent links back
    /// to the root and reversing the collected characters.
    pub(crate) fn word_of(&self, index: usize) -> String {
        let mut runes = Vec::with_capacity(self.nodes[index].depth);
        let mut curr = index;

        while let Some(parent) = self.nodes[curr].parent {
            runes.push(self.nodes[curr].rune);
            curr = parent;
        }

        runes.iter().rev().collect()
    }

    /// Pre-order traversal with an explicit stack; at every node the children
    /// are visited in ascending character order, which makes the visit order
    /// deterministic. Match reporting relies on this order as its tie-break.
    pub(crate) fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(usize, &Node),
    {
        let mut stack = vec![0];

        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];
            visit(index, node);

            let mut sorted: Vec<(char, usize)> =
                node.children.iter().map(|(&r, &i)| (r, i)).collect();
            sorted.sort_by(|a, b| b.0.cmp(&a.0));

            for (_, child) in sorted {
                stack.push(child);
            }
        }
    }
}
