//! A miniature dispatch run: boxes arrive at a dock queue, get loaded onto
//! a truck stack, and every dispatched load is recorded in the metric log.

use array_adt::{Queue, Stack};
use dispatch_metrics::DispatchLog;

#[derive(Debug, Clone, Copy)]
struct Package {
    volumetric_kg: f64,
    billed_kg: f64,
}

fn main() {
    let mut dock = Queue::new();
    for (volumetric_kg, billed_kg) in [(12.0, 10.0), (30.5, 28.0), (7.25, 7.25), (44.0, 41.5)] {
        dock.enqueue(Package {
            volumetric_kg,
            billed_kg,
        });
    }

    let mut truck = Stack::new();
    let mut log = DispatchLog::new();

    // Load in arrival order; the truck unloads in reverse.
    while let Some(package) = dock.dequeue() {
        println!("loading {package:?}");
        truck.push(package);
    }

    let boxes = truck.len() as u32;
    let volumetric: f64 = truck.iter().map(|p| p.volumetric_kg).sum();
    let billed: f64 = truck.iter().map(|p| p.billed_kg).sum();

    log.record_volumetric_weight(volumetric);
    log.record_billed_weight(billed);
    log.record_box_count(boxes);

    println!("\ndispatching {boxes} boxes:");
    while let Some(package) = truck.pop() {
        println!("  delivered {package:?}");
    }

    println!("\n{log}");
}
