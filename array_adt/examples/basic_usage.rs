use array_adt::{Bag, Queue, Sequence, Stack};

fn main() {
    println!("=== array_adt examples ===\n");

    example_sequence();
    example_stack();
    example_queue();
    example_bag();
}

fn example_sequence() {
    println!("Example 1: delivery route as a Sequence");

    let mut route: Sequence<&str> = ["bogota", "cali"].into_iter().collect();
    route.insert_at(1, "medellin").unwrap();

    for stop in &route {
        println!("  stop: {stop}");
    }
    println!();
}

fn example_stack() {
    println!("Example 2: truck cargo as a Stack (last loaded, first out)");

    let mut cargo = Stack::new();
    for label in ["fragile", "heavy", "urgent"] {
        cargo.push(label);
    }

    while let Some(label) = cargo.pop() {
        println!("  unloading: {label}");
    }
    println!();
}

fn example_queue() {
    println!("Example 3: loading dock as a Queue (first arrived, first served)");

    let mut dock = Queue::new();
    dock.enqueue("order-17");
    dock.enqueue("order-18");
    dock.enqueue("order-19");

    println!("  next up: {:?}", dock.front());
    while let Some(order) = dock.dequeue() {
        println!("  serving: {order}");
    }
    println!();
}

fn example_bag() {
    println!("Example 4: recorded weights as a Bag");

    let mut weights = Bag::new();
    for w in [12.5, 3.0, 7.25, 12.5] {
        weights.add(w);
    }

    let total: f64 = weights.iter().sum();
    println!("  {} entries, {total} kg total", weights.len());
}
