//! The fixed five-slot draft-slice topology.
//!
//! A slice is an ordered 5-tuple of tile identifiers with positional
//! meaning. Slot 4 always borders the shared map center and therefore
//! gates every route out of the slice. The topology is fixed: there is
//! no general hex-grid adjacency here, only the five known roles.

/// Number of tile slots in a draft slice.
pub const SLICE_LEN: usize = 5;

/// Positional role of a slot within a slice.
///
/// The `#[repr(u8)]` attribute enables use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SlotRole {
    HomeLeft = 0,
    Center = 1,
    HomeRight = 2,
    MecatolLeft = 3,
    MecatolGate = 4,
}

/// All slot roles in index order.
pub const ALL_SLOTS: [SlotRole; SLICE_LEN] = [
    SlotRole::HomeLeft,
    SlotRole::Center,
    SlotRole::HomeRight,
    SlotRole::MecatolLeft,
    SlotRole::MecatolGate,
];

impl SlotRole {
    /// Returns the slot's position within the slice.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One step of a canonical route: a slot within this slice, or a tile
/// owned by an adjacent slice that cannot be resolved from this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteSlot {
    Resolved(SlotRole),
    Unresolved,
}

/// Errors raised when validating raw slice input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SliceError {
    #[error("no slices provided")]
    EmptyBatch,

    #[error("slice {index} has {found} tiles, expected 5")]
    WrongLength { index: usize, found: usize },
}

/// A validated draft slice: exactly five tile identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
    tiles: [String; SLICE_LEN],
}

impl Slice {
    /// Validates a raw identifier list into a slice.
    ///
    /// `index` is the slice's 1-based position within the incoming batch
    /// and is used only for error reporting.
    pub fn from_ids(index: usize, ids: Vec<String>) -> Result<Self, SliceError> {
        let found = ids.len();
        let tiles: [String; SLICE_LEN] = ids
            .try_into()
            .map_err(|_| SliceError::WrongLength { index, found })?;
        Ok(Slice { tiles })
    }

    /// Returns the tile identifier occupying the given slot.
    pub fn tile_id(&self, role: SlotRole) -> &str {
        &self.tiles[role.index()]
    }

    /// All five tile identifiers in slot order.
    pub fn tile_ids(&self) -> &[String; SLICE_LEN] {
        &self.tiles
    }
}

impl From<[&str; SLICE_LEN]> for Slice {
    fn from(ids: [&str; SLICE_LEN]) -> Self {
        Slice {
            tiles: ids.map(str::to_string),
        }
    }
}
