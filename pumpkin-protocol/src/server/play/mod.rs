mod s_container_close;
mod s_inventory_transaction;
mod s_item_stack_request;
mod s_mob_equipment;

pub use s_container_close::*;
pub use s_inventory_transaction::*;
pub use s_item_stack_request::*;
pub use s_mob_equipment::*;
