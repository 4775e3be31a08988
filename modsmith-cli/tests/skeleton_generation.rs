//! Integration tests for module skeleton generation
//!
//! Exercises the same flow the CLI drives: build collaborators, validate,
//! generate, write every file, then inspect the tree on disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

use modsmith::{
    ConfigAliasResolver, ConfigModuleRegistry, GeneratedFile, Generator, GeneratorParams,
    ModuleSkeletonGenerator, TemplateRegistry,
};

fn generator_rooted_at(root: &Path) -> ModuleSkeletonGenerator {
    let mut roots = BTreeMap::new();
    roots.insert("app".to_string(), root.to_path_buf());
    roots.insert("runtime".to_string(), root.join("runtime"));
    ModuleSkeletonGenerator::new(
        TemplateRegistry::new().unwrap(),
        Box::new(ConfigAliasResolver::new(roots)),
        Box::new(ConfigModuleRegistry::default()),
    )
}

fn shop_params() -> GeneratorParams {
    GeneratorParams {
        module_id: "shop".to_string(),
        module_class: "app\\modules\\shop\\Module".to_string(),
        module_description: "Shop module".to_string(),
        author: "A <a@x.com>".to_string(),
        output_path: "@runtime/tmp-module".to_string(),
    }
}

fn write_all(files: &[GeneratedFile]) {
    for file in files {
        if let Some(parent) = file.path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&file.path, &file.content).unwrap();
    }
}

/// Generating and writing a skeleton produces the full expected tree.
#[test]
fn writes_complete_skeleton_tree() {
    let temp_dir = TempDir::new().unwrap();
    let generator = generator_rooted_at(temp_dir.path());
    let params = shop_params();

    generator.validate(&params).expect("parameters should be valid");
    let files = generator.generate(&params).unwrap();
    assert_eq!(files.len(), 8);
    write_all(&files);

    let module_root = temp_dir.path().join("runtime/tmp-module/shop");
    let expected = [
        "assets/index.html",
        "Assets.php",
        "config.php",
        "Events.php",
        "module.json",
        "Module.php",
        "controllers/ShopController.php",
        "views/shop/index.php",
    ];
    for relative in expected {
        let path = module_root.join(relative);
        assert!(path.is_file(), "missing generated file: {}", path.display());
    }
}

/// Rendered sources carry the derived namespaces and class names.
#[test]
fn rendered_sources_use_derived_names() {
    let temp_dir = TempDir::new().unwrap();
    let generator = generator_rooted_at(temp_dir.path());
    let files = generator.generate(&shop_params()).unwrap();
    write_all(&files);

    let module_root = temp_dir.path().join("runtime/tmp-module/shop");

    let module = fs::read_to_string(module_root.join("Module.php")).unwrap();
    assert!(module.contains("namespace app\\modules\\shop;"));
    assert!(module.contains("class Module extends \\yii\\base\\Module"));
    assert!(module.contains("app\\modules\\shop\\controllers"));

    let controller =
        fs::read_to_string(module_root.join("controllers/ShopController.php")).unwrap();
    assert!(controller.contains("namespace app\\modules\\shop\\controllers;"));
    assert!(controller.contains("class ShopController extends Controller"));
    assert!(controller.contains("$this->render('index')"));

    let view = fs::read_to_string(module_root.join("views/shop/index.php")).unwrap();
    assert!(view.contains("shop"));
}

/// The manifest is valid JSON with the expected fields.
#[test]
fn manifest_is_valid_json() {
    let temp_dir = TempDir::new().unwrap();
    let generator = generator_rooted_at(temp_dir.path());
    let files = generator.generate(&shop_params()).unwrap();

    let manifest: serde_json::Value = serde_json::from_str(&files[4].content).unwrap();
    assert_eq!(manifest["id"], "shop");
    assert_eq!(manifest["name"], "Shop");
    assert_eq!(manifest["description"], "Shop module");
    assert_eq!(manifest["author"], "A <a@x.com>");
    assert_eq!(manifest["version"], "0.1");
}

/// Re-running the generator over an existing skeleton produces identical
/// content, so a diff-driven caller sees every file as unchanged.
#[test]
fn regeneration_is_idempotent_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let generator = generator_rooted_at(temp_dir.path());
    let params = shop_params();

    let first = generator.generate(&params).unwrap();
    write_all(&first);

    let second = generator.generate(&params).unwrap();
    for file in &second {
        let on_disk = fs::read_to_string(&file.path).unwrap();
        assert_eq!(on_disk, file.content, "drift in {}", file.path.display());
    }
}

/// Validation rejects a class whose namespace root is not a configured
/// alias, before anything touches the filesystem.
#[test]
fn unknown_namespace_root_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let generator = generator_rooted_at(temp_dir.path());
    let mut params = shop_params();
    params.module_class = "vendor\\modules\\shop\\Module".to_string();

    let errors = generator.validate(&params).unwrap_err();
    assert!(errors.iter().any(|e| e.field == "module_class"));
}
