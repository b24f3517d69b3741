mod license_file_name;
mod required_file;

pub use license_file_name::LicenseFileNamePolicy;
pub use required_file::{RequiredFilePolicy, GO_MOD, GO_SUM, VENDOR_DIR};
