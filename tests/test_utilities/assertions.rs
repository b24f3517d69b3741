use gomod_inventory::prelude::*;
use std::collections::HashSet;

/// Checks the structural guarantees every analysis result must hold
///
/// Each application has at most one root package, and every `depends_on`
/// entry names a package of the same application.
pub fn assert_graph_invariants(response: &AnalysisResponse) {
    for app in &response.applications {
        let roots = app.packages.iter().filter(|p| p.is_root()).count();
        assert!(
            roots <= 1,
            "{} has {} root packages",
            app.file_path.display(),
            roots
        );

        let ids: HashSet<&str> = app.packages.iter().map(Package::id).collect();
        for pkg in &app.packages {
            for target in &pkg.depends_on {
                assert!(
                    ids.contains(target.as_str()),
                    "{}: {} depends on {} which is not in the application",
                    app.file_path.display(),
                    pkg.id(),
                    target
                );
            }
        }
    }
}
