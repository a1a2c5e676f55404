//! Zone system: the rows, columns, and 2×2 regions of the board.
//!
//! Zones are fixed by the board geometry. Rules code asks for the three
//! zones through a cell and inspects each one independently.

pub mod zone;

pub use zone::{Zone, ZONE_SIZE};
