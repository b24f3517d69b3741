/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that host adapters use to interact
/// with the application core.
pub mod module_analysis_port;

pub use module_analysis_port::ModuleAnalysisPort;
