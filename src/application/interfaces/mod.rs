/// Loan API service interface
pub mod loan;
