pub mod access;
pub mod customer;
pub mod employee;
pub mod loan;
pub mod locker;
pub mod offering;
