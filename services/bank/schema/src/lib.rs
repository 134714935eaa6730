pub mod customers;
pub mod employees;
pub mod loans;
pub mod lockers;
pub mod offerings;
