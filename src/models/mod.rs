//! Data models for LibFraga

pub mod book;
pub mod loan;
pub mod payment;
pub mod report;
pub mod user;

// Re-export commonly used types
pub use book::Book;
pub use loan::{Loan, LoanRecord, LoanStatus};
pub use payment::Payment;
pub use report::{to_record, OverdueRow, PopularBookRow, StudentLoanRow};
pub use user::{Role, User, UserInfo};
