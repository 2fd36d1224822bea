pub mod chest;
pub mod furnace;
pub mod storage;
pub mod workstation;
