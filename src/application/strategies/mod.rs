pub mod amplify;
pub mod liquidate;
pub mod smooth;
