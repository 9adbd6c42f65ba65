pub mod client;
pub mod crm_error;
pub mod labels;
pub mod models;

pub use client::CrmClient;
pub use crm_error::CrmError;
