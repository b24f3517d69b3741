/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: the scanned tree and the
/// host filesystem, plus console progress output. The manifest parser and
/// license classifier are supplied by the host.
pub mod outbound;
