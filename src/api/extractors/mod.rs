//! Custom extractors mapping axum rejections onto the application
//! error envelope.

mod json;
mod path;

pub use json::ApiJson;
pub use path::ApiPath;
