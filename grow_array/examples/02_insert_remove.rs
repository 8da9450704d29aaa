use grow_array::ArrayStore;

fn main() {
    let mut plates = ArrayStore::new();
    for plate in ["ABC-123", "XYZ-777", "QWE-456"] {
        plates.push_back(plate.to_string());
    }

    println!("initial: {:?}", plates.iter().collect::<Vec<_>>());

    // Inserting in the middle shifts everything above one slot right.
    plates.insert(1, "NEW-001".to_string()).unwrap();
    println!("after insert(1): {:?}", plates.iter().collect::<Vec<_>>());

    // A bad index is rejected without touching the store.
    if let Err(e) = plates.insert(99, "BAD-999".to_string()) {
        println!("rejected: {e}");
    }

    let removed = plates.remove(0);
    println!("remove(0) -> {:?}", removed);
    println!("final: {:?}", plates.iter().collect::<Vec<_>>());
}
