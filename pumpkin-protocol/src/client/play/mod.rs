mod c_add_actor;
mod c_block_actor_data;
mod c_container_close;
mod c_container_open;
mod c_inventory_content;
mod c_inventory_slot;
mod c_item_stack_response;
mod c_remove_actor;
mod c_update_block;

pub use c_add_actor::*;
pub use c_block_actor_data::*;
pub use c_container_close::*;
pub use c_container_open::*;
pub use c_inventory_content::*;
pub use c_inventory_slot::*;
pub use c_item_stack_response::*;
pub use c_remove_actor::*;
pub use c_update_block::*;
