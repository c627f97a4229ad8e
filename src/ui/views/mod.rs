pub mod audit;
pub mod fix;
