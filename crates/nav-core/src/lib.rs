//! Shared primitives for the navigation crates (math, cells, ids, errors).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod cancel;
pub mod cell;
pub mod error;
pub mod math;
pub mod path;

pub use cancel::CancelToken;
pub use cell::CellIndex;
pub use error::NavError;
pub use math::{Rect, Vec2};
pub use path::{AgentId, ObstacleId, PathResult};
