/// Ports module defining interfaces for hexagonal architecture
///
/// The application core only talks to the outside world (file system,
/// console) through the outbound ports declared here.
pub mod outbound;
