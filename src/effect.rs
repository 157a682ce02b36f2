//! Effects - side effects declared by the reducer
//!
//! The card never performs I/O, so there is nothing to declare. The type
//! still exists so the store and debug runtime can be wired the usual way.

#[derive(Debug, Clone)]
pub enum Effect {}
