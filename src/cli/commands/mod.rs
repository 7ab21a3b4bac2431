pub mod add;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod init;
pub mod log;
pub mod month;
pub mod serve;
