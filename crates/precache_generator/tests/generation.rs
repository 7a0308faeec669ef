//! End-to-end manifest generation over in-memory snapshots.

use precache_config::{load_config_from_str, Config, ConfigFormat, InstallMode};
use precache_diagnostics::{DiagnosticSink, Severity};
use precache_fs::MemoryFilesystem;
use precache_generator::{Generator, PatternSet};

fn json_config(json: &str) -> Config {
    load_config_from_str(json, ConfigFormat::Json).unwrap()
}

#[test]
fn single_group_scenario() {
    let config = json_config(
        r#"{
            "index": "/index.html",
            "assetGroups": [{
                "name": "app",
                "installMode": "prefetch",
                "resources": { "files": ["/*.js"] }
            }]
        }"#,
    );
    let fs = MemoryFilesystem::new()
        .with_hashed_file("/main.js", "console.log('hi')", "abc123")
        .with_file("/readme.md", "# readme");

    let manifest = Generator::new(fs, "/")
        .generate(&config, &DiagnosticSink::new())
        .unwrap();

    let app = &manifest.asset_groups[0];
    assert_eq!(app.urls, vec!["/main.js"]);
    assert_eq!(app.install_mode, InstallMode::Prefetch);
    assert_eq!(app.update_mode, InstallMode::Prefetch);
    assert_eq!(manifest.hash_table.len(), 1);
    assert_eq!(manifest.hash_table["/main.js"], "abc123");
    assert_eq!(manifest.index, "/index.html");
}

#[test]
fn overlapping_groups_first_declared_wins() {
    let config = json_config(
        r#"{
            "index": "/index.html",
            "assetGroups": [
                { "name": "shell", "resources": { "files": ["/index.html", "/*.js"] } },
                { "name": "everything", "installMode": "lazy", "resources": { "files": ["/**"] } }
            ]
        }"#,
    );
    let fs = MemoryFilesystem::new()
        .with_file("/index.html", "<html>")
        .with_file("/main.js", "main")
        .with_file("/assets/a.png", "png");

    let manifest = Generator::new(fs, "/")
        .generate(&config, &DiagnosticSink::new())
        .unwrap();

    assert_eq!(manifest.asset_groups[0].urls, vec!["/index.html", "/main.js"]);
    assert_eq!(manifest.asset_groups[1].urls, vec!["/assets/a.png"]);
    assert_eq!(manifest.hash_table.len(), 3);
}

#[test]
fn hash_table_covers_exactly_claimed_files() {
    let config = json_config(
        r#"{
            "index": "/index.html",
            "assetGroups": [{ "name": "js", "resources": { "files": ["/**/*.js", "!/**/*.spec.js"] } }]
        }"#,
    );
    let fs = MemoryFilesystem::new()
        .with_file("/main.js", "a")
        .with_file("/lib/util.js", "b")
        .with_file("/lib/util.spec.js", "c")
        .with_file("/index.html", "d");

    let manifest = Generator::new(fs, "/")
        .generate(&config, &DiagnosticSink::new())
        .unwrap();

    let keys: Vec<&str> = manifest.hash_table.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["/lib/util.js", "/main.js"]);
}

#[test]
fn listing_order_does_not_change_output() {
    let config = json_config(
        r#"{
            "index": "/index.html",
            "assetGroups": [
                { "name": "app", "resources": { "files": ["/*.html", "/*.js"] } },
                { "name": "assets", "installMode": "lazy", "resources": { "files": ["/assets/**"] } }
            ],
            "dataGroups": [
                { "name": "api", "urls": ["/api/**"], "cacheConfig": { "maxSize": 10, "maxAge": "1h" } }
            ]
        }"#,
    );
    let files = [
        ("/index.html", "<html>"),
        ("/main.js", "main"),
        ("/polyfills.js", "poly"),
        ("/assets/z.png", "z"),
        ("/assets/a.png", "a"),
        ("/assets/icons/m.svg", "m"),
    ];

    let forward = files
        .iter()
        .fold(MemoryFilesystem::new(), |fs, (p, c)| fs.with_file(*p, *c));
    let reversed = files
        .iter()
        .rev()
        .fold(MemoryFilesystem::new(), |fs, (p, c)| fs.with_file(*p, *c));

    let a = Generator::new(forward, "/")
        .generate(&config, &DiagnosticSink::new())
        .unwrap();
    let b = Generator::new(reversed, "/")
        .generate(&config, &DiagnosticSink::new())
        .unwrap();

    assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
    assert_eq!(
        a.asset_groups[1].urls,
        vec!["/assets/a.png", "/assets/icons/m.svg", "/assets/z.png"]
    );
}

#[test]
fn update_mode_follows_install_mode() {
    let config = json_config(
        r#"{
            "index": "/index.html",
            "assetGroups": [
                { "name": "lazy", "installMode": "lazy", "resources": { "files": ["/*.png"] } },
                { "name": "mixed", "installMode": "lazy", "updateMode": "prefetch", "resources": {} },
                { "name": "plain", "resources": {} }
            ]
        }"#,
    );
    let manifest = Generator::new(MemoryFilesystem::new(), "/")
        .generate(&config, &DiagnosticSink::new())
        .unwrap();

    let lazy = manifest.asset_group("lazy").unwrap();
    assert_eq!(lazy.update_mode, InstallMode::Lazy);
    let mixed = manifest.asset_group("mixed").unwrap();
    assert_eq!(mixed.install_mode, InstallMode::Lazy);
    assert_eq!(mixed.update_mode, InstallMode::Prefetch);
    let plain = manifest.asset_group("plain").unwrap();
    assert_eq!(plain.install_mode, InstallMode::Prefetch);
    assert_eq!(plain.update_mode, InstallMode::Prefetch);
}

#[test]
fn default_navigation_urls() {
    let config = json_config(r#"{ "index": "/index.html" }"#);
    let manifest = Generator::new(MemoryFilesystem::new(), "/")
        .generate(&config, &DiagnosticSink::new())
        .unwrap();

    assert_eq!(manifest.navigation_urls.len(), 4);
    let navigation = PatternSet::from_navigation_urls(&manifest.navigation_urls).unwrap();
    assert!(!navigation.is_match("/app.js"));
    assert!(navigation.is_match("/dashboard"));
}

#[test]
fn asset_group_url_patterns_keep_query_literal() {
    let config = json_config(
        r#"{
            "index": "/index.html",
            "assetGroups": [{
                "name": "fonts",
                "installMode": "lazy",
                "resources": { "urls": ["https://fonts.example.com/**", "images/*.png?v=*"] }
            }]
        }"#,
    );
    let manifest = Generator::new(MemoryFilesystem::new(), "/app/")
        .generate(&config, &DiagnosticSink::new())
        .unwrap();

    let fonts = &manifest.asset_groups[0];
    assert!(fonts.urls.is_empty());
    assert_eq!(
        fonts.patterns,
        vec![
            "https:\\/\\/fonts\\.example\\.com(?:\\/.*)?",
            "\\/app\\/images\\/[^/]*\\.png\\?v=[^/]*",
        ]
    );
}

#[test]
fn brace_placeholders_in_globs() {
    let config = json_config(
        r#"{
            "index": "/index.html",
            "assetGroups": [{ "name": "app", "resources": { "files": ["/**/*.js", "/assets/{x}.png"] } }],
            "dataGroups": [{ "name": "api", "urls": ["/api/{id}"], "cacheConfig": { "maxSize": 10, "maxAge": "1h" } }]
        }"#,
    );
    let fs = MemoryFilesystem::new()
        .with_hashed_file("/main.js", "main", "h-main")
        .with_hashed_file("/assets/{x}.png", "png", "h-x")
        .with_hashed_file("/assets/y.png", "png", "h-y");
    let manifest = Generator::new(fs, "/")
        .generate(&config, &DiagnosticSink::new())
        .unwrap();

    assert_eq!(manifest.asset_groups[0].urls, vec!["/assets/{x}.png", "/main.js"]);
    assert!(!manifest.hash_table.contains_key("/assets/y.png"));
    assert_eq!(manifest.data_groups[0].patterns, vec!["\\/api\\/{id}"]);
}

#[test]
fn empty_max_age_resolves_to_zero() {
    let config = json_config(
        r#"{
            "index": "/index.html",
            "dataGroups": [{ "name": "api", "urls": ["/api/**"], "cacheConfig": { "maxSize": 10, "maxAge": "" } }]
        }"#,
    );
    let manifest = Generator::new(MemoryFilesystem::new(), "/")
        .generate(&config, &DiagnosticSink::new())
        .unwrap();
    assert_eq!(manifest.data_groups[0].max_age, 0);
    assert!(manifest.to_json().unwrap().contains("\"maxAge\": 0"));
}

#[test]
fn versioned_files_emit_one_warning_per_group() {
    let config = json_config(
        r#"{
            "index": "/index.html",
            "assetGroups": [
                { "name": "legacy", "resources": { "versionedFiles": ["/*.js"] } },
                { "name": "modern", "resources": { "files": ["/*.css"] } },
                { "name": "also-legacy", "resources": { "versionedFiles": "/*.svg" } }
            ]
        }"#,
    );
    let fs = MemoryFilesystem::new()
        .with_file("/main.js", "a")
        .with_file("/styles.css", "b")
        .with_file("/logo.svg", "c");
    let sink = DiagnosticSink::new();

    let manifest = Generator::new(fs, "/").generate(&config, &sink).unwrap();

    assert_eq!(manifest.asset_groups[0].urls, vec!["/main.js"]);
    assert_eq!(manifest.asset_groups[2].urls, vec!["/logo.svg"]);
    let diags = sink.take_all();
    assert_eq!(diags.len(), 2);
    assert!(diags.iter().all(|d| d.severity == Severity::Warning));
    assert!(diags.iter().all(|d| d.code.to_string() == "W001"));
    assert_eq!(diags[0].location.as_deref(), Some("assetGroups[legacy]"));
    assert_eq!(diags[1].location.as_deref(), Some("assetGroups[also-legacy]"));
    assert!(!sink.has_errors());
}

#[test]
fn pass_through_fields() {
    let config = json_config(
        r#"{
            "index": "index.html",
            "appData": { "build": 42 },
            "push": { "showNotifications": true }
        }"#,
    );
    let manifest = Generator::new(MemoryFilesystem::new(), "/base")
        .generate(&config, &DiagnosticSink::new())
        .unwrap();

    assert_eq!(manifest.index, "/base/index.html");
    assert_eq!(manifest.app_data, Some(serde_json::json!({ "build": 42 })));
    assert_eq!(manifest.push, Some(serde_json::json!({ "showNotifications": true })));
}

#[test]
fn manifest_json_shape() {
    let config = json_config(
        r#"{
            "index": "/index.html",
            "assetGroups": [{ "name": "app", "resources": { "files": ["/index.html"] } }],
            "dataGroups": [{
                "name": "api",
                "urls": ["/api/**"],
                "version": 2,
                "cacheConfig": { "maxSize": 50, "maxAge": "3d", "timeout": "10s", "strategy": "freshness" }
            }],
            "navigationUrls": ["/**"]
        }"#,
    );
    let fs = MemoryFilesystem::new().with_hashed_file("/index.html", "<html>", "h1");
    let manifest = Generator::new(fs, "/")
        .generate(&config, &DiagnosticSink::new())
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&manifest.to_json().unwrap()).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "configVersion": 1,
            "index": "/index.html",
            "assetGroups": [{
                "name": "app",
                "installMode": "prefetch",
                "updateMode": "prefetch",
                "urls": ["/index.html"],
                "patterns": []
            }],
            "dataGroups": [{
                "name": "api",
                "patterns": ["\\/api(?:\\/.*)?"],
                "strategy": "freshness",
                "maxSize": 50,
                "maxAge": 259200000,
                "timeoutMs": 10000,
                "version": 2
            }],
            "hashTable": { "/index.html": "h1" },
            "navigationUrls": [{ "positive": true, "regex": "^(?:\\/.*)?$" }]
        })
    );
}

#[test]
fn toml_config_generates_same_manifest() {
    let json = json_config(
        r#"{
            "index": "/index.html",
            "assetGroups": [{ "name": "app", "resources": { "files": ["/*.js"] } }],
            "dataGroups": [{ "name": "api", "urls": "/api/**", "cacheConfig": { "maxSize": 5, "maxAge": "1h" } }]
        }"#,
    );
    let toml = load_config_from_str(
        r#"
index = "/index.html"

[[assetGroups]]
name = "app"
resources = { files = ["/*.js"] }

[[dataGroups]]
name = "api"
urls = "/api/**"
cacheConfig = { maxSize = 5, maxAge = "1h" }
"#,
        ConfigFormat::Toml,
    )
    .unwrap();

    let fs = MemoryFilesystem::new().with_file("/main.js", "x");
    let generator = Generator::new(fs, "/");
    let a = generator.generate(&json, &DiagnosticSink::new()).unwrap();
    let b = generator.generate(&toml, &DiagnosticSink::new()).unwrap();
    assert_eq!(a, b);
}
