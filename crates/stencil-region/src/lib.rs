//! `Region`: a set of lattice points stored as sorted per-row streaks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod region;

pub use region::Region;
