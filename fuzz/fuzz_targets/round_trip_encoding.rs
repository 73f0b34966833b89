#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate arbor;

use arbor::BinaryTree;

fuzz_target!(|data: &[u8]| {
    // Arbitrary text must either be rejected or decode to a tree that re-encodes stably
    let text = match std::str::from_utf8(data) {
        Ok(text) => text,
        Err(_) => return,
    };
    if let Ok(tree) = BinaryTree::<i64>::deserialize(text) {
        let encoded = tree.serialize().unwrap();
        let decoded = BinaryTree::<i64>::deserialize(&encoded).unwrap();
        assert_eq!(decoded, tree);
    }
});
