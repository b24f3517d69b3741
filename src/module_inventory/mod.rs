/// Domain layer - Go module inventory
///
/// Pure business logic: the application/package model, the graph repair
/// and merge services, and the file naming policies. No I/O happens here.
pub mod domain;
pub mod policies;
pub mod services;
