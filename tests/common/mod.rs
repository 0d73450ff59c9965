//! Common test utilities for integration tests.
#![allow(dead_code)]

use std::sync::Mutex;

use cellkey::mapper::{DiagnosticSink, MapFailure};

/// Random binary field, biased towards the characters the key layouts treat
/// specially.
pub fn random_field(rng: &mut fastrand::Rng, max_len: usize) -> Vec<u8> {
    let len = rng.usize(0..=max_len);
    (0..len)
        .map(|_| match rng.u8(0..10) {
            0 => b'-',
            1 => b'@',
            2 => b'\\',
            _ => rng.u8(..),
        })
        .collect()
}

/// Whether `field` can sit next to a hyphen delimiter without merging into
/// its neighbour.
pub fn splits_cleanly(field: &[u8]) -> bool {
    field.last() != Some(&b'\\')
}

/// Sink collecting every reported failure.
#[derive(Default)]
pub struct CollectingSink(Mutex<Vec<MapFailure>>);

impl CollectingSink {
    pub fn failures(&self) -> Vec<MapFailure> {
        self.0.lock().expect("sink mutex").clone()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, failure: &MapFailure) {
        self.0.lock().expect("sink mutex").push(failure.clone());
    }
}
