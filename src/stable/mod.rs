//! Sorts that keep equal elements in their input order.

pub mod bubble;
pub mod hybrid_merge;
pub mod insertion;
