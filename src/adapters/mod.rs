pub mod hashing;
pub mod mock;
pub mod postgres;
