pub mod valuation_service;
pub mod user_service;
pub mod order_service;
pub mod trading_service;
pub mod portfolio_service;
