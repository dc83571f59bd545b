#[macro_use]
extern crate afl;

fn main() {
    fuzz!(|data: &[u8]| {
        attr_tree_fuzz::test(data);
        attr_tree_fuzz::test_stream(data);
    });
}
