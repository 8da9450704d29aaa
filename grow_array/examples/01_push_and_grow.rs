use grow_array::ArrayStore;

fn main() {
    println!("=== ArrayStore: growth ===\n");

    let mut store = ArrayStore::new();
    println!("fresh store: len={} cap={}", store.len(), store.capacity());

    for i in 0..10 {
        store.push_back(i);
        println!("push {:2} -> len={:2} cap={:2}", i, store.len(), store.capacity());
    }

    println!("\n=== ArrayStore: shrink ===\n");

    while let Some(v) = store.take_back() {
        let shrank = store.shrink_if_sparse();
        println!(
            "take {:2} -> len={:2} cap={:2}{}",
            v,
            store.len(),
            store.capacity(),
            if shrank { "  (halved)" } else { "" }
        );
    }
}
