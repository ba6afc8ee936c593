use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use flakeid::{decode, IdWorker, WorkerConfig};

fn main() {
    // A central id service: custom 10-bit node id, 14-bit sequence, 2 s tolerance
    let config = WorkerConfig::builder()
        .custom_node(7)
        .time_back_tolerance(200)
        .build()
        .unwrap();
    let worker = Arc::new(IdWorker::with_config(config));

    let handles: Vec<_> = (0..4)
        .map(|thread_id| {
            let worker = Arc::clone(&worker);
            thread::spawn(move || {
                let ids: Vec<i64> = (0..10_000).map(|_| worker.next_id().unwrap()).collect();
                let last = decode(*ids.last().unwrap()).unwrap();
                println!("Thread {thread_id} last id: {last}");
                ids
            })
        })
        .collect();

    let mut all_ids = HashSet::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }
    println!("\nTotal unique IDs generated: {}", all_ids.len());
}
