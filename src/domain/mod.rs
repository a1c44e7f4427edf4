pub mod author;
pub mod book;
pub mod borrowing_record;
pub mod customer;
pub mod search;
pub mod value_objects;

pub use author::*;
pub use book::*;
pub use borrowing_record::*;
pub use customer::*;
pub use search::*;
pub use value_objects::*;
