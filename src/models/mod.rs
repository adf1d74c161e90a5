pub mod user;
pub mod order;

pub use user::{Deposit, DepositKind, User};
pub use order::{Order, OrderKind, OrderStatus};
