pub mod hybrid;
pub mod influencer;
pub mod paid_search;
