use std::path::Path;

use async_trait::async_trait;

use crate::loader::error::{LoaderError, Result};
use crate::loader::{LoadPlan, ModuleLoader, run_schema};
use crate::structure::entry::{EntryKind, LoaderSchema, MergedEntry};

fn schema(merged_specs: Vec<MergedEntry>) -> LoaderSchema {
    LoaderSchema {
        merged_specs,
        not_found: Vec::new(),
    }
}

fn component(name: &str, modules: &[&str]) -> MergedEntry {
    MergedEntry {
        name: name.to_string(),
        kind: EntryKind::Component,
        modules: modules
            .iter()
            .map(|m| MergedEntry::leaf(*m, EntryKind::Module))
            .collect(),
    }
}

#[tokio::test]
async fn test_load_plan_records_schema_order() {
    let base = Path::new("/app/api/pluginOne");
    let schema = schema(vec![
        component("models", &["TestModel.js"]),
        component("controllers", &["TestTwoController.js", "TestController.js"]),
        MergedEntry::leaf("routes.js", EntryKind::Module),
    ]);

    let mut plan = LoadPlan::new();
    run_schema(&schema, base, &mut plan)
        .await
        .expect("run_schema failed");

    assert_eq!(
        plan.actions(),
        &[
            base.join("models/TestModel.js"),
            base.join("controllers/TestTwoController.js"),
            base.join("controllers/TestController.js"),
            base.join("routes.js"),
        ]
    );
}

#[tokio::test]
async fn test_empty_component_produces_no_actions() {
    let base = Path::new("/app/api/pluginThree");
    let schema = schema(vec![component("emptyComp", &[])]);

    let mut plan = LoadPlan::new();
    run_schema(&schema, base, &mut plan)
        .await
        .expect("run_schema failed");

    assert!(plan.actions().is_empty());
}

#[tokio::test]
async fn test_plugin_leaf_gets_one_action() {
    let base = Path::new("/app/api");
    let schema = schema(vec![
        MergedEntry::leaf("pluginTwo", EntryKind::Plugin),
        MergedEntry::leaf("pluginOne", EntryKind::Plugin),
    ]);

    let mut plan = LoadPlan::new();
    run_schema(&schema, base, &mut plan)
        .await
        .expect("run_schema failed");

    assert_eq!(
        plan.actions(),
        &[base.join("pluginTwo"), base.join("pluginOne")]
    );
}

#[tokio::test]
async fn test_failing_load_action_aborts_the_walk() {
    struct FailingLoader {
        attempted: usize,
    }

    #[async_trait]
    impl ModuleLoader for FailingLoader {
        async fn load_module(&mut self, path: &Path) -> Result<()> {
            self.attempted += 1;
            Err(LoaderError::ActionFailed {
                path: path.to_path_buf(),
                message: "boom".to_string(),
                source: None,
            })
        }
    }

    let base = Path::new("/app/api/pluginOne");
    let schema = schema(vec![
        MergedEntry::leaf("routes.js", EntryKind::Module),
        MergedEntry::leaf("other.js", EntryKind::Module),
    ]);

    let mut loader = FailingLoader { attempted: 0 };
    let result = run_schema(&schema, base, &mut loader).await;

    assert!(result.is_err(), "A failing load action should abort");
    assert_eq!(loader.attempted, 1, "No further actions after the failure");
}
