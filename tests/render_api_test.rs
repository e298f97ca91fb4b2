//! Integration tests for template rendering over the built-in catalog.

use pipewright::pipeline::{catalog, render_builtin, select_templates, TargetKind, TargetType};
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn full_context() -> HashMap<String, String> {
    [
        ("branch", "main"),
        ("azureServiceConnection", "deploy-connection"),
        ("webAppName", "fabrikam-shop"),
        ("nodeVersion", "20.x"),
        ("jdkVersion", "1.17"),
        ("pythonVersion", "3.12"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn all_templates() -> Vec<&'static catalog::PipelineTemplate> {
    [
        catalog::BASE_TEMPLATES,
        catalog::NODE_TEMPLATES,
        catalog::JAVA_TEMPLATES,
        catalog::PYTHON_TEMPLATES,
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[test]
fn every_rendered_template_is_valid_yaml() {
    let context = full_context();

    for template in all_templates() {
        let rendered = render_builtin(template.path, &context).unwrap();

        assert!(
            !rendered.contains("{{"),
            "unrendered placeholder left in {}",
            template.path
        );
        let parsed: serde_yaml::Value = serde_yaml::from_str(&rendered)
            .unwrap_or_else(|e| panic!("{} is not valid YAML: {}", template.path, e));
        assert!(parsed.get("steps").is_some(), "{} has no steps", template.path);
    }
}

#[test]
fn rendered_values_land_in_place() {
    let rendered = render_builtin("nodejs.yml", &full_context()).unwrap();

    assert!(rendered.contains("appName: 'fabrikam-shop'"));
    assert!(rendered.contains("versionSpec: '20.x'"));
    assert!(rendered.contains("- 'main'"));
}

#[test]
fn missing_context_keys_render_empty() {
    let rendered = render_builtin("simple-webapp.yml", &HashMap::new()).unwrap();

    assert!(rendered.contains("appName: ''"));
    assert!(!rendered.contains("{{"));
}

#[test]
fn selected_template_renders_end_to_end() {
    let repo = TempDir::new().unwrap();
    fs::write(repo.path().join("pom.xml"), "<project/>").unwrap();

    let selected = select_templates(
        repo.path(),
        Some(TargetType::WebApp),
        Some(TargetKind::LinuxApp),
    )
    .unwrap();
    assert_eq!(selected.len(), 1);

    let rendered = render_builtin(selected[0].path, &full_context()).unwrap();
    assert!(rendered.contains("Maven@3"));
    assert!(rendered.contains("appName: 'fabrikam-shop'"));
}
