use crate::module_inventory::domain::{Application, Relationship};

/// OrphanAttacher - Reparents indirect dependencies that lost their parent
///
/// Without a module cache (or with an incomplete one) indirect packages end
/// up in the package list with no incoming edge. They are hung under the main
/// module so every package stays reachable from the root.
pub struct OrphanAttacher;

impl OrphanAttacher {
    /// Attaches orphans under the root package of every application
    ///
    /// Applications without a root package are left untouched.
    pub fn attach(apps: &mut [Application]) {
        for app in apps.iter_mut() {
            Self::attach_to_root(app);
        }
    }

    /// Returns the number of ids appended to the root's `depends_on`
    pub fn attach_to_root(app: &mut Application) -> usize {
        let Some(root_idx) = app.root_index() else {
            return 0;
        };

        let parents = app.parent_deps();
        let orphans: Vec<String> = app
            .packages
            .iter()
            .filter(|pkg| {
                pkg.relationship() == Relationship::Indirect
                    && parents.get(pkg.id()).map_or(true, Vec::is_empty)
            })
            .map(|pkg| pkg.id().to_string())
            .collect();

        let root = &mut app.packages[root_idx];
        let mut attached = 0;
        for id in orphans {
            if !root.depends_on.contains(&id) {
                root.depends_on.push(id);
                attached += 1;
            }
        }
        attached
    }
}
