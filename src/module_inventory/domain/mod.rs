pub mod application;
pub mod dependency;
pub mod license_file;
pub mod module_layout;
pub mod package;

pub use application::Application;
pub use dependency::Dependency;
pub use license_file::{LicenseFile, LicenseFinding};
pub use module_layout::ModuleLayout;
pub use package::{ModuleName, Package, Relationship, Version};
