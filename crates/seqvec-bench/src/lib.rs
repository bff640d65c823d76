//! Benchmark profiles and utilities for the seqvec container.
//!
//! Provides the fill helpers shared by the criterion benches, so every
//! bench measures the same workloads.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use seqvec::SeqVec;

/// Build a container holding `0..count`.
pub fn filled(count: usize) -> SeqVec<u64> {
    let mut v = SeqVec::new();
    for i in 0..count as u64 {
        v.push_back(i);
    }
    v
}
