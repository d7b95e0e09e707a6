pub mod html;

pub use html::{html_response, html_response_with_status};

pub type ResultResp = Result<astra::Response, crate::errors::ServerError>;
