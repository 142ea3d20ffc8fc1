//! This crate implements a general-purpose dynamic storage allocator that
//! manages a single contiguous, monotonically-growing heap region.
//!
//!  - **Binned segregated free list.** Free blocks are kept in 28
//!    doubly-linked lists indexed by the floor-log2 size class, bracketed by
//!    a pair of lowest/highest nonempty-bin cursors that keep searches
//!    short.
//!
//!  - **Boundary tags.** Every block carries a 32-bit header and an
//!    identical footer, so both physical neighbors of a freed block can be
//!    inspected and coalesced in constant time.
//!
//!  - **Tail cursor.** The allocator tracks its own logical end of heap
//!    below the provider's physical end. Memory freed at the leading edge is
//!    reabsorbed by retreating the cursor instead of ever touching the free
//!    list, and repeated growth at the tail reuses it before asking the
//!    provider for more.
//!
//!  - **The heap region is provided by the application.** [`BrkSource`]
//!    is the brk-like contract the allocator consumes; [`ArenaBrk`] is a
//!    capacity-bounded in-memory region suitable for tests and embedding,
//!    and [`SbrkBrk`] drives the real program break on Unix.
//!
//!  - **This crate supports `#![no_std]`.** The validator and the arena
//!    provider are gated behind the `std` feature (enabled by default).
//!
//! # Examples
//!
//! ```rust
//! use binfit::{ArenaBrk, BinFit};
//!
//! let mut heap: BinFit<ArenaBrk> = BinFit::new(ArenaBrk::new(1 << 16));
//! heap.init().unwrap();
//!
//! let p = heap.allocate(100).unwrap();
//! assert_eq!(p.as_ptr() as usize % binfit::GRANULARITY, 0);
//!
//! unsafe {
//!     p.as_ptr().write_bytes(0x5a, 100);
//!     let q = heap.resize(p, 200).unwrap();
//!     assert_eq!(q.as_ptr().read(), 0x5a);
//!     heap.free(q);
//! }
//!
//! heap.check().unwrap();
//! ```
#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod binfit;
mod brk;
#[cfg(any(test, feature = "std"))]
mod trace;

pub use self::{
    binfit::{
        BinFit, CheckError, BIN_COUNT, GRANULARITY, MAX_ALLOC_SIZE, MIN_BLOCK_SIZE,
        SPLIT_THRESHOLD_DEFAULT,
    },
    brk::{BrkSource, HeapExhausted},
};

#[cfg(any(test, feature = "std"))]
pub use self::{
    brk::ArenaBrk,
    trace::{validate, Malloc, TraceOp, ValidateError},
};

#[cfg(unix)]
pub use self::brk::SbrkBrk;
