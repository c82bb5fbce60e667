//! Formation geometry and group path dispatch.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod dispatch;
pub mod formation;

pub use dispatch::{find_group_paths, GroupMember};
pub use formation::{formation_slots, Formation};
