pub mod add;
pub mod aggregate;
pub mod calculator;
pub mod del;
pub mod list;
pub mod period;
