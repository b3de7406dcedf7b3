/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod lists_request;
mod lists_response;

pub use lists_request::{ListsRequest, DEFAULT_OUTPUT_DIR};
pub use lists_response::ListsResponse;
