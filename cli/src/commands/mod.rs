pub mod compute;
pub mod resolve;
