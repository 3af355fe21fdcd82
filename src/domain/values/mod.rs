pub mod action;
pub mod assessment;
pub mod bet_quality;
pub mod budget;
pub mod inventory;
pub mod matching;
pub mod priority;
pub mod product_category;
pub mod trend_class;
