use std::cmp::min;

use crate::trie::Trie;

/// Fills in the distance row of every node in one parent-before-child pass.
///
/// `row[i]` of a node becomes the edit distance between the query prefix of
/// length `i + 1` and the dictionary prefix ending at that node. The root
/// row is the Wagner-Fischer base case (`i + 1` insertions from the empty
/// prefix); every other row is derived from the parent row plus two scalar
/// accumulators, so the work shared by words with a common prefix is done
/// exactly once. Unit costs throughout: insert, delete, and substitute all
/// cost 1.
pub fn propagate(trie: &mut Trie) {
    let query_len = trie.query.len();

    for i in 0..query_len {
        trie.nodes[0].row[i] = i + 1;
    }

    // Explicit work list instead of recursion; a node's parent row is always
    // complete before the node is popped.
    let mut stack: Vec<usize> = trie.nodes[0].children.values().cloned().collect();

    while let Some(index) = stack.pop() {
        let parent = match trie.nodes[index].parent {
            Some(parent) => parent,
            None => continue,
        };

        let rune = trie.nodes[index].rune;
        let depth = trie.nodes[index].depth;

        // Distance to the empty query prefix for this node and its parent.
        let mut up = depth;
        let mut up_left = depth - 1;

        for i in 0..query_len {
            let left = trie.nodes[parent].row[i];

            let cell = if trie.query[i] == rune {
                up_left
            } else {
                min(up_left + 1, min(up + 1, left + 1))
            };

            trie.nodes[index].row[i] = cell;
            up = cell;
            up_left = left;
        }

        stack.extend(trie.nodes[index].children.values().cloned());
    }
}
