mod block_registry;

pub use block_registry::{get_block, get_block_by_id, Block, BLOCKS};
