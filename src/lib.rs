#![no_std]
#![forbid(unsafe_op_in_unsafe_fn, clippy::undocumented_unsafe_blocks)]

extern crate alloc;

pub mod pointer;
pub mod view;
