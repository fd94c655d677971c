pub mod bills;
pub mod logout;
pub mod new_bill;

pub use bills::Bills;
pub use logout::Logout;
pub use new_bill::NewBill;
