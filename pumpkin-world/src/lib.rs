pub mod block;
pub mod item;
pub mod level;

pub use level::{BlockEntityData, Level, WorldView};
