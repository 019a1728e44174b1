//! SQL query functions over a borrowed connection.

pub mod aggregation;
pub mod results;
