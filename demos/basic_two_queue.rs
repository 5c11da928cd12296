//! Walkthrough of the two-queue cache: admission, promotion, demotion and
//! forgetting.
//!
//! Run with: cargo run --example basic_two_queue

use lrufreq::builder::CacheBuilder;
use lrufreq::traits::{Probe, ProbeCache};

fn main() {
    println!("=== Two-Queue Cache Example ===\n");

    let mut cache = CacheBuilder::new(3)
        .build::<&str, String>()
        .expect("capacity 3 is valid");
    println!("Created cache: capacity={} per queue\n", cache.capacity());

    // First sighting: everything lands in the admission queue.
    for key in ["a", "b", "c"] {
        cache.put(key, key.to_uppercase()).expect("fresh key");
    }
    println!("Put a, b, c");
    println!("  admission: {:?}", cache.admission_keys().collect::<Vec<_>>());

    // Second sighting promotes.
    cache.lookup(&"a");
    cache.lookup(&"b");
    println!("\nLooked up a, b (promoted)");
    println!("  admission: {:?}", cache.admission_keys().collect::<Vec<_>>());
    println!("  protected: {:?}", cache.protected_keys().collect::<Vec<_>>());

    // A scan of one-off keys only churns admission.
    for key in ["s1", "s2", "s3", "s4"] {
        cache.put(key, key.to_uppercase()).expect("fresh key");
    }
    println!("\nAfter scanning s1..s4:");
    println!("  admission: {:?}", cache.admission_keys().collect::<Vec<_>>());
    println!("  protected: {:?}", cache.protected_keys().collect::<Vec<_>>());
    println!("  c still resident? {}", cache.contains(&"c"));

    // Probe/fetch split.
    if cache.lookup(&"a") {
        println!("\nfetch(a) = {}", cache.fetch(&"a").expect("just probed"));
    }

    // The usual "probe, insert on miss" loop.
    println!("\n=== lookup_or_put ===\n");
    for key in ["x", "x", "a", "y"] {
        let probe = cache
            .lookup_or_put(key, || key.to_uppercase())
            .expect("miss path inserts a fresh key");
        let label = match probe {
            Probe::Hit => "hit",
            Probe::Miss => "miss (added)",
        };
        println!("  {} -> {}", key, label);
    }
    println!("  resident: {}", cache.len());
}

// Expected output:
// === Two-Queue Cache Example ===
//
// Created cache: capacity=3 per queue
//
// Put a, b, c
//   admission: ["c", "b", "a"]
//
// Looked up a, b (promoted)
//   admission: ["c"]
//   protected: ["b", "a"]
//
// After scanning s1..s4:
//   admission: ["s4", "s3", "s2"]
//   protected: ["b", "a"]
//   c still resident? false
//
// fetch(a) = A
//
// === lookup_or_put ===
//
//   x -> miss (added)
//   x -> hit
//   a -> hit
//   y -> miss (added)
//   resident: 6
