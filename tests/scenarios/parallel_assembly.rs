//! One assembler shared by many threads

use crate::common::*;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn concurrent_assembly_matches_sequential() {
    let (assembler, discovery) = scenario_fixture().assembler();
    let artifacts = discovery.discover(STACK);
    let expected = assembler.assemble_all(&artifacts).unwrap();

    let assembler = Arc::new(assembler);
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let assembler = Arc::clone(&assembler);
            let barrier = Arc::clone(&barrier);
            let artifacts = artifacts.clone();
            thread::spawn(move || {
                barrier.wait();
                (0..100)
                    .map(|_| assembler.assemble_all(&artifacts).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for names in handle.join().unwrap() {
            assert_eq!(names, expected);
        }
    }
}
