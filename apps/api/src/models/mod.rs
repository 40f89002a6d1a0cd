pub mod interest;
pub mod listing;
pub mod query;
pub mod quiz;
