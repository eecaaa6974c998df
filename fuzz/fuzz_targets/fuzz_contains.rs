#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Split input into word and pattern; containment and position must
    // agree with the standard library's substring search.
    let mut parts = data.splitn(2, '\n');
    let word: String = parts.next().unwrap_or("").chars().take(64).collect();
    let pattern: String = parts.next().unwrap_or("").chars().take(16).collect();

    let trie = sxi::index::SuffixTrie::build(&word);

    assert_eq!(trie.contains(&pattern), word.contains(&pattern));

    if pattern.is_empty() {
        return;
    }

    let expected = word
        .find(&pattern)
        .map(|byte_idx| word[..byte_idx].chars().count() as u32);
    assert_eq!(trie.find_position(&pattern), expected);
});
