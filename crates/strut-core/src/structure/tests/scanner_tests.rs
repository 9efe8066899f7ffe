use std::fs;
use std::path::PathBuf;

use crate::structure::entry::DiskEntry;
use crate::structure::scanner::{list_components, list_plugins, load_component};
use crate::structure::tests::fixture::basic_app;

fn plugin(name: &str) -> DiskEntry {
    DiskEntry::Plugin {
        name: name.to_string(),
    }
}

fn module(name: &str) -> DiskEntry {
    DiskEntry::Module {
        name: name.to_string(),
    }
}

fn component(name: &str, modules: Vec<DiskEntry>) -> DiskEntry {
    DiskEntry::Component {
        name: name.to_string(),
        modules,
    }
}

#[tokio::test]
async fn test_list_plugins_sorted_by_name() {
    let tmp = basic_app();

    let result = list_plugins(tmp.path()).await.expect("list_plugins failed");

    // Byte-order ascending: uppercase letters before '_'
    assert_eq!(
        result,
        vec![
            plugin("pluginOne"),
            plugin("pluginThree"),
            plugin("pluginTwo"),
            plugin("plugin_underscore"),
        ]
    );
}

#[tokio::test]
async fn test_list_plugins_ignores_files() {
    let tmp = basic_app();
    fs::write(tmp.path().join("notes.txt"), "hello").expect("Failed to write dummy file");

    let result = list_plugins(tmp.path()).await.expect("list_plugins failed");

    assert_eq!(result.len(), 4, "Files at the root level should be ignored");
    assert!(result.iter().all(|e| e.name() != "notes.txt"));
}

#[tokio::test]
async fn test_list_plugins_missing_root_is_empty() {
    let missing = PathBuf::from("./non_existent_app_root_for_test");

    let result = list_plugins(&missing).await.expect("list_plugins failed");

    assert!(result.is_empty(), "A missing root should scan as empty, not fail");
}

#[tokio::test]
async fn test_list_components_orders_components_before_modules() {
    let tmp = basic_app();

    let result = list_components(&tmp.path().join("pluginOne"))
        .await
        .expect("list_components failed");

    assert_eq!(
        result,
        vec![
            component(
                "controllers",
                vec![module("TestController.js"), module("TestTwoController.js")]
            ),
            component("models", vec![module("TestModel.js")]),
            component(
                "services",
                vec![module("Test2Service.js"), module("TestService.js")]
            ),
            module("routes.js"),
        ]
    );
}

#[tokio::test]
async fn test_list_components_empty_component() {
    let tmp = basic_app();

    let result = list_components(&tmp.path().join("pluginThree"))
        .await
        .expect("list_components failed");

    assert_eq!(result, vec![component("emptyComp", vec![])]);
}

#[tokio::test]
async fn test_list_components_missing_plugin_dir_is_empty() {
    let tmp = basic_app();

    let result = list_components(&tmp.path().join("pluginGhost"))
        .await
        .expect("list_components failed");

    assert!(result.is_empty());
}

#[tokio::test]
async fn test_load_component_with_two_modules() {
    let tmp = basic_app();

    let result = load_component("controllers", &tmp.path().join("pluginOne/controllers"))
        .await
        .expect("load_component failed");

    assert_eq!(
        result,
        component(
            "controllers",
            vec![module("TestController.js"), module("TestTwoController.js")]
        )
    );
}

#[tokio::test]
async fn test_load_component_with_no_modules() {
    let tmp = basic_app();

    let result = load_component("emptyComp", &tmp.path().join("pluginThree/emptyComp"))
        .await
        .expect("load_component failed");

    assert_eq!(result, component("emptyComp", vec![]));
}

#[tokio::test]
async fn test_load_component_ignores_subdirectories() {
    let tmp = basic_app();
    let dir = tmp.path().join("pluginOne/controllers");
    fs::create_dir(dir.join("nested")).expect("Failed to create nested directory");

    let result = load_component("controllers", &dir)
        .await
        .expect("load_component failed");

    // Modules are flat: the nested directory does not appear
    assert_eq!(
        result,
        component(
            "controllers",
            vec![module("TestController.js"), module("TestTwoController.js")]
        )
    );
}

#[tokio::test]
async fn test_repeated_scans_are_identical() {
    let tmp = basic_app();

    let first = list_components(&tmp.path().join("pluginOne"))
        .await
        .expect("first scan failed");
    let second = list_components(&tmp.path().join("pluginOne"))
        .await
        .expect("second scan failed");

    assert_eq!(first, second, "Scans of an unchanged tree must be deterministic");

    let plugins_first = list_plugins(tmp.path()).await.expect("first scan failed");
    let plugins_second = list_plugins(tmp.path()).await.expect("second scan failed");
    assert_eq!(plugins_first, plugins_second);
}
