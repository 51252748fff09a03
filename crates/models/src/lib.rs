pub mod db;
pub mod device;
