pub mod campaign;
pub mod event;
pub mod influencer;
pub mod product;
pub mod trend;
