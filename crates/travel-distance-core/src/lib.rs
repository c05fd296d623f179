//! Travel Distance Core Library
//!
//! Directed weighted route graphs and the queries answered over them:
//! travel time along a route, bounded route enumeration and shortest route.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod loader;
pub mod logging;
pub mod mode;
