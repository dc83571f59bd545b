#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    attr_tree_fuzz::test(data);
    attr_tree_fuzz::test_stream(data);
});
