pub mod clients;
pub mod utils;
