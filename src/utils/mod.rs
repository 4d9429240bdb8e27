pub mod errors;
pub mod helpers;
