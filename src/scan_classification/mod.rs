/// Domain layer - host records, the category rule table and classification
///
/// Everything in here is pure: no file system access and no console output.
pub mod domain;
pub mod services;
