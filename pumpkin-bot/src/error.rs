use log::log;
use pumpkin_core::math::position::WorldPosition;
use pumpkin_inventory::InventoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Container at {0} did not open in time")]
    OpenContainerTimeout(WorldPosition),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    #[error("Listener failed: {0}")]
    Listener(String),
    #[error("Connection to the server is closed")]
    ConnectionClosed,
}

impl BotError {
    /// Whether the session cannot continue after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::ConnectionClosed)
    }

    pub fn severity(&self) -> log::Level {
        match self {
            Self::ConnectionClosed => log::Level::Error,
            Self::OpenContainerTimeout(_) | Self::Listener(_) => log::Level::Warn,
            Self::Inventory(err) if err.is_verification_failure() => log::Level::Warn,
            Self::Inventory(_) => log::Level::Info,
        }
    }

    pub fn log(&self) {
        log!(self.severity(), "{self}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_transport_errors_are_fatal() {
        assert!(BotError::ConnectionClosed.is_fatal());
        assert!(!BotError::OpenContainerTimeout(WorldPosition::new(1, 2, 3)).is_fatal());
        assert!(!BotError::from(InventoryError::NoWindowOpen).is_fatal());
    }

    #[test]
    fn verification_failures_are_louder() {
        assert_eq!(
            BotError::from(InventoryError::StaleReference(-4)).severity(),
            log::Level::Warn
        );
        assert_eq!(
            BotError::from(InventoryError::NoDestinationSlot).severity(),
            log::Level::Info
        );
    }
}
