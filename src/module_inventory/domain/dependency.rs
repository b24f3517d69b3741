/// Direct dependencies a module declares in its own go.mod
///
/// `depends_on` holds module names, not ids; they are resolved against the
/// application's package set before landing in `Package::depends_on`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dependency {
    pub id: String,
    pub depends_on: Vec<String>,
}

impl Dependency {
    pub fn new(id: String, depends_on: Vec<String>) -> Self {
        Self { id, depends_on }
    }
}
