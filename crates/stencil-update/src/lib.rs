//! The unstructured parallel stencil update functor.
//!
//! Given a `Region` of cells to update, a model's kernel(s), and a
//! `ReorderingGrid`/`SparseMatrix` pair, [`update`] gathers each cell's
//! weighted neighbor contributions and writes the new grid generation —
//! with no implicit double-buffer swap; callers own that.
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod capabilities;
pub mod concurrency;
pub mod error;
pub mod functor;
pub mod hood;
pub mod model;
pub mod peeler;

pub use capabilities::CellCapabilities;
pub use concurrency::ConcurrencySpec;
pub use error::UpdateError;
pub use functor::update;
pub use hood::{NewHood, OldHood};
pub use model::Model;
pub use peeler::{peel, LoopPeeler, Peel, PeelKind};
