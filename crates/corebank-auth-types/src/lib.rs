pub mod basic;
pub mod principal;
