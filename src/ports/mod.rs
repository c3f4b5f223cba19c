/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports are the infrastructure interfaces the application core
/// uses to reach the outside world (filesystem, output destinations).
pub mod outbound;
