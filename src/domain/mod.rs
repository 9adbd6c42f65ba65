pub mod paging;
pub mod property;

pub use paging::Pager;
pub use property::Property;
