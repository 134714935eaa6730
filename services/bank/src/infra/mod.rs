pub mod db;

pub use db::{
    DbCustomerRepository, DbEmployeeRepository, DbLoanRepository, DbLockerRepository,
    DbOfferingRepository,
};
