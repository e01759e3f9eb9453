//! Suggest the dictionary word(s) closest to a misspelled input.
//!
//! The dictionary is held as a prefix trie with one edit-distance row per
//! node, filled in a single parent-before-child pass, so the dynamic
//! programming work shared by words with a common prefix happens once
//! instead of once per word.

mod candidate;
mod common;
mod config;
mod distance;
mod error;
mod select;
mod trie;

pub mod prelude {
    pub use crate::candidate::Candidate;
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::select::Matches;
    pub use crate::DidYouMean;
}

pub use crate::candidate::Candidate;
pub use crate::config::Config;
pub use crate::distance::propagate;
pub use crate::error::{Error, Result};
pub use crate::select::{best_matches, Matches};
pub use crate::trie::Trie;

use std::fs::File;

use crossbeam_channel as channel;
use threads_pool::*;

/// The suggestion service. Owns the worker pool that streams the dictionary
/// file while the calling thread builds the trie.
pub struct DidYouMean {
    pool: ThreadPool,
    config: Config,
}

impl DidYouMean {
    pub fn new() -> DidYouMean {
        DidYouMean::with_config(Config::new())
    }

    pub fn with_config(config: Config) -> DidYouMean {
        let pool = ThreadPool::new(2);

        DidYouMean { pool, config }
    }

    /// Streams the configured dictionary and builds a trie bound to `word`.
    /// The trie comes back unpropagated so the caller can report load
    /// diagnostics before the distance pass runs.
    pub fn load_trie(&self, word: &str) -> Result<Trie> {
        if word.is_empty() {
            return Err(Error::EmptyQuery);
        }

        let file = File::open(self.config.get_dict_path()).map_err(Error::DictOpen)?;

        let (tx, rx) = channel::unbounded();
        self.pool.execute(move || {
            common::stream_lines(file, tx);
        });

        let mut trie = Trie::with_query(word);
        for line in rx {
            trie.insert(&line);
        }

        if trie.word_count() == 0 {
            return Err(Error::EmptyDictionary);
        }

        Ok(trie)
    }

    /// One-shot run: load, propagate, select. `Ok(None)` means the whole
    /// dictionary sits further away than the last distance threshold.
    pub fn suggest(&self, word: &str) -> Result<Option<Matches>> {
        let mut trie = self.load_trie(word)?;

        // Already a correct word; skip the distance pass.
        if trie.contains(word) {
            let candidates = vec![Candidate::new(word.to_owned(), 0)];
            return Ok(Some(Matches {
                distance: 0,
                candidates,
            }));
        }

        distance::propagate(&mut trie);

        Ok(select::best_matches(&trie))
    }
}

impl Default for DidYouMean {
    fn default() -> Self {
        DidYouMean::new()
    }
}
