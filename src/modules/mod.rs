//! Sequence types and record I/O built on the engines

pub mod io;
pub mod seq;
