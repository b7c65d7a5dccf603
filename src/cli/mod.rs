//! Terminal rendering and command entry points.

pub mod chart;
pub mod markets;
pub mod movers;
pub mod setup;
pub mod target;
pub mod ui;
pub mod watch;
