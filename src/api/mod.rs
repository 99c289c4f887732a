pub mod client;
pub mod response;

pub use client::{authorization_header, Context7Client, QueryParams, RequestExecutor};
pub use response::parse_body;
