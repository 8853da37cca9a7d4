//! Request / response types

pub mod leaf;
pub mod irrigation;
pub mod supply_chain;
pub mod soil;

pub use leaf::*;
pub use irrigation::*;
pub use supply_chain::*;
pub use soil::*;
