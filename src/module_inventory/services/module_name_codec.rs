use crate::module_inventory::domain::ModuleLayout;

/// ModuleNameCodec - Encodes module paths into module cache directory names
///
/// The Go module cache is case-insensitive safe: every upper-case letter is
/// written as `!` followed by its lower-case form. Only the encoding
/// direction is needed here.
pub struct ModuleNameCodec;

impl ModuleNameCodec {
    /// Escapes upper-case characters
    ///
    /// e.g. `github.com/BurntSushi/toml` => `github.com/!burnt!sushi/toml`
    pub fn escape(name: &str) -> String {
        let mut escaped = String::with_capacity(name.len());
        for c in name.chars() {
            if c.is_uppercase() {
                escaped.push('!');
                escaped.extend(c.to_lowercase());
            } else {
                escaped.push(c);
            }
        }
        escaped
    }

    /// Directory name of a module under the layout's base directory
    ///
    /// Vendored copies use the plain module path and carry no version; the
    /// module cache uses the escaped path with an `@version` suffix.
    ///
    /// e.g. `$GOPATH/pkg/mod/github.com/!burnt!sushi/toml@v1.3.2`
    pub fn module_dir_name(name: &str, version: &str, layout: ModuleLayout) -> String {
        match layout {
            ModuleLayout::Vendored => name.to_string(),
            ModuleLayout::ModuleCache => format!("{}@{}", Self::escape(name), version),
        }
    }
}
