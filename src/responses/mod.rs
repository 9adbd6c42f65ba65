pub mod errors;
pub mod html;
pub mod pdf;
pub mod redirect;

pub use errors::{error_to_response, ResultResp};
pub use html::html_response;
pub use pdf::pdf_response;
pub use redirect::see_other;
