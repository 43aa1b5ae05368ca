pub mod fields;
pub mod handler;
pub mod parser;
pub mod response;

pub use handler::SubmissionHandler;
pub use response::ContactResponse;
