#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Build and query on arbitrary words without panicking.
    // Cap the length: the trie is O(n^2) in nodes.
    let word: String = data.chars().take(64).collect();
    let trie = sxi::index::SuffixTrie::build(&word);

    let _ = trie.longest_repeated();
    let _ = trie.most_repeated();
    let _ = trie.stats();
});
