use thiserror::Error;

/// Why a batch of slot actions could not be built or applied.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InventoryError {
    #[error("Could not find container with id {0}")]
    ContainerNotFound(u8),
    #[error("Slot {slot} does not exist in container {container_id}")]
    InvalidSlot { container_id: u8, slot: u8 },
    #[error("Slot pointed to stack request {0}, but that change is unknown or expired")]
    StaleReference(i32),
    #[error("Stack id mismatch: expected {expected}, but the slot holds {actual}")]
    IdentityMismatch { expected: i32, actual: i32 },
    #[error("Too many unacknowledged slot changes")]
    TooManyPendingChanges,
    #[error("Tried taking {requested} items, but only {available} are present")]
    InsufficientCount { requested: u8, available: u8 },
    #[error("Tried adding {added} to item count {current}, but max is {max}")]
    StackOverflow { current: u8, added: u8, max: u8 },
    #[error("Tried transferring between incomparable stacks")]
    IncomparableStacks,
    #[error("Invalid pending result slot {0}")]
    InvalidCreateSlot(u8),
    #[error("Tried duplicating created result {0}")]
    DuplicateCreation(u8),
    #[error("Unknown recipe with network id {0}")]
    UnknownRecipe(u32),
    #[error("Unknown item with network id {0}")]
    UnknownItem(u32),
    #[error("Drop was cancelled")]
    DropCancelled,
    #[error("No recipe for {0} can be supplied from the inventory")]
    NoCraftableRecipe(String),
    #[error("No free slot to put the result in")]
    NoDestinationSlot,
    #[error("No container is opened")]
    NoWindowOpen,
    #[error("Slot {0} does not address any container")]
    InvalidLogicalSlot(i32),
    #[error("Request contains no actions")]
    EmptyRequest,
    #[error("Request {request_id} rejected, {action}: {source}")]
    Rejected {
        request_id: i32,
        action: &'static str,
        source: Box<InventoryError>,
    },
}

impl InventoryError {
    /// Whether the error came from checking a slot against the mirrored state, rather than from a
    /// rule of the action itself.
    pub fn is_verification_failure(&self) -> bool {
        match self {
            InventoryError::ContainerNotFound(_)
            | InventoryError::InvalidSlot { .. }
            | InventoryError::StaleReference(_)
            | InventoryError::IdentityMismatch { .. }
            | InventoryError::TooManyPendingChanges => true,
            InventoryError::Rejected { source, .. } => source.is_verification_failure(),
            _ => false,
        }
    }
}
