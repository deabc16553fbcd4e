pub mod initialize;
pub mod migrate;
pub mod pool;
