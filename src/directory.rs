use crate::config::SortOrder;
use crate::model::AppEntry;

/// Enumerates installable applications. Implementations are expected to
/// skip entries whose metadata cannot be loaded rather than fail the
/// whole query, and to return the list already sorted.
pub trait AppDirectory {
    fn all_apps(&self, show_system_apps: bool) -> Vec<AppEntry>;
}

pub trait Launcher {
    fn launch(&self, app: &AppEntry) -> bool;
}

pub fn sort_apps(apps: &mut [AppEntry], order: SortOrder) {
    match order {
        SortOrder::Name => apps.sort_by_key(|app| app.name.to_lowercase()),
        // Package id stands in for install date, newest-looking first.
        SortOrder::InstallDate => {
            apps.sort_by(|a, b| b.id.cmp(&a.id));
        }
    }
}

/// Fixed app list, used by tests and by shells that enumerate apps
/// themselves.
pub struct StaticDirectory {
    apps: Vec<AppEntry>,
    sort_by: SortOrder,
}

impl StaticDirectory {
    pub fn new(apps: Vec<AppEntry>) -> Self {
        Self {
            apps,
            sort_by: SortOrder::Name,
        }
    }

    pub fn sorted_by(mut self, order: SortOrder) -> Self {
        self.sort_by = order;
        self
    }
}

impl AppDirectory for StaticDirectory {
    fn all_apps(&self, show_system_apps: bool) -> Vec<AppEntry> {
        let mut apps: Vec<AppEntry> = self
            .apps
            .iter()
            .filter(|app| show_system_apps || !app.is_system)
            .cloned()
            .collect();
        sort_apps(&mut apps, self.sort_by);
        apps
    }
}

/// Launcher that records nothing and always succeeds; shells provide
/// the real platform hook.
pub struct NullLauncher;

impl Launcher for NullLauncher {
    fn launch(&self, _app: &AppEntry) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IconHandle;

    fn sample() -> Vec<AppEntry> {
        vec![
            AppEntry::new("com.zeta.files", "files"),
            AppEntry::system("com.android.settings", "Settings"),
            AppEntry::new("com.acme.browser", "Browser").with_icon(IconHandle(7)),
        ]
    }

    #[test]
    fn system_apps_hidden_by_default_query() {
        let dir = StaticDirectory::new(sample());
        let apps = dir.all_apps(false);
        assert_eq!(apps.len(), 2);
        assert!(apps.iter().all(|app| !app.is_system));

        let with_system = dir.all_apps(true);
        assert_eq!(with_system.len(), 3);
    }

    #[test]
    fn name_sort_ignores_case() {
        let dir = StaticDirectory::new(sample());
        let names: Vec<String> = dir.all_apps(true).into_iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["Browser", "files", "Settings"]);
    }

    #[test]
    fn install_date_sort_uses_descending_id() {
        let dir = StaticDirectory::new(sample()).sorted_by(SortOrder::InstallDate);
        let ids: Vec<String> = dir.all_apps(true).into_iter().map(|a| a.id).collect();
        assert_eq!(
            ids,
            vec!["com.zeta.files", "com.android.settings", "com.acme.browser"]
        );
    }
}
