pub mod classify;
pub mod launch;
pub mod opportunities;
pub mod recommend;
pub mod stats;
pub mod strategies;
pub mod variants;
