//! A* search over the walkability grid, line-of-sight smoothing, result
//! caching, and the top-level [`Pathfinder`] facade.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

mod cache;
mod search;
mod smooth;

pub mod pathfinder;

pub use pathfinder::{NavOptions, Pathfinder};
