use std::env;
use std::io::{self, Write};
use std::process;

use did_you_mean::prelude::*;
use did_you_mean::{best_matches, propagate};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <dictfile> <word>", args[0]);
        process::exit(1);
    }

    let config = Config::with_dict_path(&args[1]);
    let service = DidYouMean::with_config(config);

    let mut trie = match service.load_trie(&args[2]) {
        Ok(trie) => trie,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    eprintln!(
        "Loaded {} words ({} nodes)",
        trie.word_count(),
        trie.node_count()
    );

    eprint!("Calculating distances ... ");
    propagate(&mut trie);
    eprintln!("done.");

    eprint!("Did you mean: ");
    if let Some(matches) = best_matches(&trie) {
        let words: Vec<String> = matches.candidates.iter().map(|c| c.get_word()).collect();
        print!("{}", words.join(" "));
        let _ = io::stdout().flush();
    }
    eprintln!();
}
