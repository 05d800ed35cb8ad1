#![no_std]
#![cfg_attr(doc, svgbobdoc::transform)]
//! A [Two-Level Segregated Fit][tlsf] (TLSF) allocator managing a single
//! contiguous pool of memory.
//!
//! [tlsf]: http://www.gii.upv.es/tlsf/
//!
//! TLSF splits free blocks into a matrix of segregated free lists indexed
//! by a first-level (power-of-two) and second-level (linear, within a
//! power-of-two range) bucket:
//!
//! <center>
//! ```svgbob
//!   First level
//!                               ,-----+-----+-----+-----+-----+-----+-----+-----,
//!         fl_bitmap: u16     =  |  0  |  0  |  0  |  1  |  0  |  0  |  0  |  0  |
//!                               +-----+-----+-----+-----+-----+-----+-----+-----+
//!                      min size | 2¹¹ | 2¹⁰ |  2⁹ |  2⁸ |  2⁷ |  2⁶ |  2⁵ |  2⁴ |
//!                               '-----+-----+--+--+-----+-----+-----+-----+-----'
//!                                                 |
//!   Second Level                                  v
//!                                  ,-----+-----+-----+-----+-----+-----+-----+-----,
//!        "sl_bitmap[3]: u16"   =  |  0  |  0  |  1  |  0  |  0  |  0  |  0  |  0  |
//!                                  +-----+-----+-----+-----+-----+-----+-----+-----+
//!                       first_free |     |     |  O  |     |     |     |     |     |
//!                                  '-----+-----+--|--+-----+-----+-----+-----+-----'
//!                                                 |
//!   Free blocks                                   v
//!             ,-----------------------------------'
//!             | ,---+---+-------,    ,---+---+-------,
//!             '-+>O | O-+-------+----+>O |   |       |
//!               +---+---'       |    +---+---'       |
//!               '---------------'    '---------------'
//! ```
//! </center>
//!
//! Both the bucket lookup (via bit-scan over the bitmaps) and every block
//! operation (insert, remove, split, merge) run in constant time, which is
//! this design's main advantage over an ordinary free list or a
//! size-sorted tree.
//!
//! # Usage
//!
//! The low-level, pool-agnostic allocator is [`Tlsf`]; it owns no memory
//! of its own and is handed a region to manage:
//!
//! ```
//! use core::mem::MaybeUninit;
//! use tlsf_pool::Tlsf;
//!
//! let mut region = [MaybeUninit::uninit(); 4096];
//! let mut tlsf = Tlsf::new();
//! tlsf.insert_free_block(&mut region).unwrap();
//!
//! let ptr = tlsf.allocate(64).unwrap();
//! unsafe { tlsf.deallocate(ptr) };
//! ```
//!
//! When the `std` feature is enabled, a process-wide singleton pool
//! backed by `std::alloc` is available through [`init`], [`malloc`],
//! [`free`], and [`teardown`]:
//!
//! ```ignore
//! // Requires the `std` feature.
//! tlsf_pool::init(64 * 1024).unwrap();
//! let ptr = tlsf_pool::malloc(128).unwrap();
//! unsafe { tlsf_pool::free(Some(ptr)) };
//! tlsf_pool::teardown();
//! ```

#[cfg(any(test, feature = "std"))]
extern crate std;

mod block;
mod error;
mod index;
mod limits;
mod pool;
mod provider;
mod tlsf;

#[cfg(any(test, feature = "std"))]
mod singleton;


pub use crate::{
    error::PoolError,
    limits::{MAX_BLOCK_SIZE, MIN_BLOCK_SIZE},
    pool::{MAX_POOL_SIZE, MIN_POOL_SIZE},
    provider::PoolSource,
    tlsf::Tlsf,
};

#[cfg(any(test, feature = "std"))]
pub use crate::{
    provider::StdSource,
    singleton::{free, init, malloc, teardown},
};
