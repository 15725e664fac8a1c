pub mod bars;
pub mod dashboard;
pub mod footer;
pub mod theme;
