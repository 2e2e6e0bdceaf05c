pub mod balance;
pub mod mining_info;
pub mod send_money;
pub mod timestamp;
pub mod transaction;
