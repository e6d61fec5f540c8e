#![no_main]
use libfuzzer_sys::fuzz_target;
use pathtrie::{Trie, TrieOptions};

fuzz_target!(|data: (Vec<(String, i32)>, String, bool, bool)| {
    let (patterns, path, trailing, consecutive) = data;

    let options = TrieOptions::new()
        .ignore_trailing_slashes(trailing)
        .ignore_consecutive_slashes(consecutive);
    let mut trie = Trie::with_options(options);

    for (pattern, value) in patterns {
        trie.insert(pattern, value);
    }

    if let Ok(matches) = trie.lookup(&path) {
        assert!(!matches.is_empty());
    }
});
