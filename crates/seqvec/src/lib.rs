//! A growable, owning, contiguous sequence container.
//!
//! [`SeqVec`] stores homogeneous elements in one exclusively-owned heap
//! buffer: amortized-constant append, checked positional access, and
//! linear-time insertion and removal at arbitrary positions. Copying is
//! value-semantic — [`Clone`] produces an independent deep copy sized to the
//! source's capacity.
//!
//! # Architecture
//!
//! ```text
//! SeqVec<T> (public container)
//! ├── len — live-prefix length; elements occupy slots [0, len)
//! └── RawBuf<T> (raw.rs) — NonNull<T> + capacity
//!     └── Layout-paired alloc / grow / dealloc, memory only
//! ```
//!
//! # Invariants
//!
//! - `len <= capacity` always.
//! - Slots `[0, len)` hold live elements contiguously; slots
//!   `[len, capacity)` are uninitialized and never read or dropped.
//! - Capacity never shrinks. Growth multiplies it by 1.6
//!   (integer-truncated) with a one-slot floor, so degenerate capacities
//!   still make progress.
//!
//! # Safety
//!
//! `unsafe` is confined to the allocator-facing primitives in `raw` and the
//! container's slot-level operations in `buf`; every site carries a
//! `// SAFETY:` comment naming the invariant it relies on. The rest of the
//! crate denies `unsafe_code`.
//!
//! # Concurrency
//!
//! None. The container carries no internal synchronization: `Send` and
//! `Sync` follow the element type, and concurrent use is governed entirely
//! by Rust's `&`/`&mut` rules.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod buf;
pub mod error;
mod raw;

// Public re-exports for the primary API surface.
pub use buf::SeqVec;
pub use error::SeqVecError;
