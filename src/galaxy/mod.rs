//! Galaxy map data: tile records, the tile catalog, and slice topology.
//!
//! Contains the core data structures for system tiles, planets, stations,
//! the string-keyed tile store, and the fixed five-slot draft slice.

pub mod catalog;
pub mod slice;
pub mod tile;

pub use catalog::{CatalogError, TileCatalog};
pub use slice::{RouteSlot, Slice, SliceError, SlotRole, ALL_SLOTS, SLICE_LEN};
pub use tile::{Legendary, Planet, Station, SystemTile, TileType, TraitField};
