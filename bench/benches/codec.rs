use std::hint::black_box;

use attr_tree::{ItemClass, ItemStack, Tree};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn inventory(slots: usize) -> Tree {
    let mut root = Tree::new();
    root.set_string("owner", "Ada");
    root.set_vec3i("pos", attr_tree::Vec3i::new(512, 64, -128));
    let stats = root.get_or_add_tree("stats").unwrap();
    stats.set_int("hp", 20);
    stats.set_float("speed", 1.25);
    stats.set_double_array("history", vec![0.5; 32]);

    let items = (0..slots)
        .map(|slot| {
            let mut attributes = Tree::new();
            attributes.set_string("material", "iron");
            attributes.set_float("temperature", 20.0 + slot as f32);
            attributes.set_int_array("wear", vec![slot as i32; 8]);
            let stack = ItemStack::new(ItemClass::Item, slot as i32, 1 + (slot % 64) as i32)
                .with_attributes(attributes);
            let mut entry = Tree::new();
            entry.set_int("slot", slot as i32);
            entry.set_item_stack("stack", Some(stack));
            entry
        })
        .collect::<Vec<_>>();
    root.set_tree_array("slots", items);
    root
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    for slots in [8usize, 64, 512] {
        let tree = inventory(slots);
        let bytes = tree.to_bytes().unwrap();
        group.throughput(Throughput::Bytes(bytes.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", slots), &tree, |b, tree| {
            b.iter(|| black_box(tree.to_bytes().unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("decode", slots), &bytes, |b, bytes| {
            b.iter(|| black_box(Tree::from_bytes(bytes).unwrap()))
        });
    }
    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let tree = inventory(64);
    let other = tree.clone();
    let mut group = c.benchmark_group("compare");
    group.bench_function("equals", |b| b.iter(|| black_box(tree.equals(&other))));
    group.bench_function("equals_ignoring", |b| {
        b.iter(|| black_box(tree.equals_ignoring(&other, attr_tree::TRANSIENT_KEYS)))
    });
    group.bench_function("structural_hash", |b| {
        b.iter(|| black_box(tree.structural_hash(&[])))
    });
    group.bench_function("merge", |b| {
        b.iter(|| {
            let mut target = tree.clone();
            target.merge(&other).unwrap();
            black_box(target)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_codec, bench_compare);
criterion_main!(benches);
