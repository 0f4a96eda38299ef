//! `menu check` command implementation.

use clap::Args;
use menu_config::CliSettings;
use menu_store::{MenuStore, Target};
use menu_store_fs::YamlStore;
use menu_tree::{RouteTable, Router};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

/// Result of checking a menu file.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct CheckReport {
    /// `(name, depth, item count)` per menu.
    pub(crate) menus: Vec<(String, u32, usize)>,
    /// Route names referenced by items but missing from the route table.
    pub(crate) unknown_routes: Vec<String>,
}

impl CheckReport {
    fn item_count(&self) -> usize {
        self.menus.iter().map(|(_, _, items)| items).sum()
    }
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or the menu file is
    /// unreadable or invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.config.load(CliSettings::default())?;
        let store = YamlStore::new(config.store_resolved.path.clone());
        output.info(&format!("Checking {}", store.path().display()));

        let mut routes: RouteTable = store.routes()?.into_iter().collect();
        routes.extend(config.routes.clone());

        let report = check_store(&store, &routes)?;
        for (name, depth, items) in &report.menus {
            output.menu(name, *depth, *items);
        }
        for route in &report.unknown_routes {
            output.warning(&format!("Unknown route name: {route}"));
        }

        output.success(&format!(
            "Menu file is valid: {} menus, {} items",
            report.menus.len(),
            report.item_count()
        ));
        Ok(())
    }
}

/// Load every menu and collect route names the router cannot resolve.
fn check_store(store: &dyn MenuStore, router: &dyn Router) -> Result<CheckReport, CliError> {
    let mut report = CheckReport::default();

    for menu in store.menus()? {
        let items = store.items(&menu.name)?;
        for item in &items {
            if let Some(name) = item.target.as_ref().and_then(Target::route_name)
                && router.resolve_name_to_path(name).is_err()
                && !report.unknown_routes.iter().any(|known| known == name)
            {
                report.unknown_routes.push(name.to_owned());
            }
        }
        report.menus.push((menu.name, menu.depth, items.len()));
    }

    Ok(report)
}
