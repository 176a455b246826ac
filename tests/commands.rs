use crypto_icons::commands::config::{self, ConfigOptions};
use crypto_icons::commands::init::{self, InitOptions};
use crypto_icons::commands::update::{self, UpdateOptions, HOSTING_BASE_URL, HOSTING_HOST};
use crypto_icons::commands::{add, remove, EditOptions, IconSelection};
use crypto_icons::settings::{Config, SettingsStore};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn tokens(names: &[&str]) -> EditOptions {
    EditOptions {
        selection: IconSelection {
            token: names.iter().map(|n| n.to_string()).collect(),
            ..IconSelection::default()
        },
        dir: None,
    }
}

fn icons_dir(root: &Path) -> PathBuf {
    root.join("src/components/crypto-icons")
}

// ── config ──────────────────────────────────────────────────────────

#[test]
fn config_flags_merge_into_stored_settings() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    config::run(
        root,
        &ConfigOptions {
            dir: Some("app/icons".into()),
            ..ConfigOptions::default()
        },
    )
    .unwrap();
    config::run(
        root,
        &ConfigOptions {
            dark_mode_class: Some("night".into()),
            ..ConfigOptions::default()
        },
    )
    .unwrap();

    let stored = SettingsStore::new(root).load();
    assert_eq!(stored.default_directory.as_deref(), Some("app/icons"));
    assert_eq!(stored.dark_mode_class(), "night");
    assert_eq!(stored.image_base_path(), "/images/crypto");
}

#[test]
fn config_reset_clears_settings() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    config::run(
        root,
        &ConfigOptions {
            image_path: Some("/img".into()),
            ..ConfigOptions::default()
        },
    )
    .unwrap();

    config::run(
        root,
        &ConfigOptions {
            reset: true,
            ..ConfigOptions::default()
        },
    )
    .unwrap();

    assert_eq!(SettingsStore::new(root).load(), Config::default());
    assert_eq!(
        fs::read_to_string(root.join(".crypto-icons.json")).unwrap(),
        "{}\n"
    );
}

// ── init ────────────────────────────────────────────────────────────

#[test]
fn init_creates_the_generated_files() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    init::run(root, &InitOptions::default()).unwrap();

    let dir = icons_dir(root);
    for file in [
        "constants/imagePaths.ts",
        "types/index.ts",
        "types/TokenSymbol.ts",
        "types/WalletName.ts",
        "types/SystemName.ts",
        "CryptoIcon.tsx",
        "index.ts",
    ] {
        assert!(dir.join(file).is_file(), "{file} should exist");
    }
    for sub in ["tokens", "wallets", "systems"] {
        assert!(dir.join(sub).is_dir(), "{sub}/ should exist");
    }

    let component = fs::read_to_string(dir.join("CryptoIcon.tsx")).unwrap();
    assert!(component.contains("import Image from \"next/image\""));
    assert!(component.contains("dark:hidden"));

    // local image path, nothing to whitelist
    assert!(!root.join("next.config.js").exists());
}

#[test]
fn init_keeps_existing_files() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    init::run(root, &InitOptions::default()).unwrap();
    add::run(root, &tokens(&["BTC"])).unwrap();

    let map_path = icons_dir(root).join("constants/imagePaths.ts");
    let before = fs::read_to_string(&map_path).unwrap();
    init::run(root, &InitOptions::default()).unwrap();

    assert_eq!(fs::read_to_string(&map_path).unwrap(), before);
}

#[test]
fn init_uses_configured_settings() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    config::run(
        root,
        &ConfigOptions {
            dir: Some("app/icons".into()),
            image_path: Some("https://cdn.example.com/crypto".into()),
            dark_mode_class: Some("night".into()),
            reset: false,
        },
    )
    .unwrap();

    init::run(root, &InitOptions::default()).unwrap();

    let dir = root.join("app/icons");
    let map = fs::read_to_string(dir.join("constants/imagePaths.ts")).unwrap();
    assert!(map.contains("export const baseImgUrl = \"https://cdn.example.com/crypto\";"));
    let component = fs::read_to_string(dir.join("CryptoIcon.tsx")).unwrap();
    assert!(component.contains("night:hidden"));

    let next_config = fs::read_to_string(root.join("next.config.js")).unwrap();
    assert!(next_config.contains("hostname: 'cdn.example.com'"));
}

// ── add / remove ────────────────────────────────────────────────────

#[test]
fn add_without_init_fails() {
    let tmp = TempDir::new().unwrap();
    let err = add::run(tmp.path(), &tokens(&["BTC"])).unwrap_err();
    assert!(format!("{err:#}").contains("crypto-next-icons init"));
}

#[test]
fn add_with_no_names_is_a_no_op() {
    let tmp = TempDir::new().unwrap();
    add::run(tmp.path(), &EditOptions::default()).unwrap();
    remove::run(tmp.path(), &EditOptions::default()).unwrap();
}

#[test]
fn names_before_a_failure_are_kept() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    init::run(root, &InitOptions::default()).unwrap();

    let err = add::run(root, &tokens(&["BTC", "bad name", "ETH"])).unwrap_err();
    assert!(format!("{err:#}").contains("bad name"));

    let symbols = fs::read_to_string(icons_dir(root).join("types/TokenSymbol.ts")).unwrap();
    assert!(symbols.contains("BTC = \"BTC\""));
    assert!(!symbols.contains("ETH"));
}

#[test]
fn add_and_remove_respect_explicit_dir() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let dir = PathBuf::from("lib/icons");
    init::run(
        root,
        &InitOptions {
            dir: Some(dir.clone()),
            ..InitOptions::default()
        },
    )
    .unwrap();
    let map_path = root.join("lib/icons/constants/imagePaths.ts");
    let initial = fs::read_to_string(&map_path).unwrap();

    let options = EditOptions {
        selection: IconSelection {
            wallet: vec!["MetaMask".into()],
            system: vec!["Ethereum".into()],
            ..IconSelection::default()
        },
        dir: Some(dir),
    };
    add::run(root, &options).unwrap();
    let map = fs::read_to_string(&map_path).unwrap();
    assert!(map.contains("lightMode: baseImgUrlWallet(\"MetaMask\"),"));
    assert!(map.contains("lightMode: baseImgUrlSystem(\"Ethereum\"),"));

    remove::run(root, &options).unwrap();
    assert_eq!(fs::read_to_string(&map_path).unwrap(), initial);
}

// ── update ──────────────────────────────────────────────────────────

#[test]
fn update_points_helpers_at_the_cdn() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    init::run(root, &InitOptions::default()).unwrap();
    add::run(root, &tokens(&["BTC"])).unwrap();
    fs::write(
        root.join("next.config.js"),
        "module.exports = {\n  images: {\n    remotePatterns: [\n      { protocol: 'https', hostname: 'firebasestorage.googleapis.com' },\n    ],\n  },\n};\n",
    )
    .unwrap();

    update::run(root, &UpdateOptions::default()).unwrap();

    let map = fs::read_to_string(icons_dir(root).join("constants/imagePaths.ts")).unwrap();
    assert!(map.contains(&format!("export const baseImgUrl = \"{HOSTING_BASE_URL}\";")));
    assert!(map.contains("\"BTC\": {"));
    assert_eq!(map.matches("export const baseImgUrlToken").count(), 1);

    let next_config = fs::read_to_string(root.join("next.config.js")).unwrap();
    assert!(next_config.contains(HOSTING_HOST));
    assert!(!next_config.contains("firebasestorage"));

    // running again changes nothing
    update::run(root, &UpdateOptions::default()).unwrap();
    assert_eq!(
        fs::read_to_string(icons_dir(root).join("constants/imagePaths.ts")).unwrap(),
        map
    );
}

#[test]
fn update_replaces_wrapped_helper_definitions() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    init::run(root, &InitOptions::default()).unwrap();
    let map_path = icons_dir(root).join("constants/imagePaths.ts");

    // the layout prettier gives the seeded helpers
    let wrapped = fs::read_to_string(&map_path)
        .unwrap()
        .replace(
            "export const baseImgUrl = \"/images/crypto\";",
            "export const baseImgUrl =\n  \"/images/crypto\";",
        )
        .replace(
            "export const baseImgUrlToken = (nameToken: string) => `",
            "export const baseImgUrlToken = (nameToken: string) =>\n  `",
        );
    fs::write(&map_path, wrapped).unwrap();

    update::run(root, &UpdateOptions::default()).unwrap();

    let map = fs::read_to_string(&map_path).unwrap();
    assert!(!map.contains("/images/crypto"), "old base URL left behind:\n{map}");
    assert_eq!(map.matches("/token/${nameToken}.png").count(), 1);
    assert!(map.contains(&format!(
        "export const baseImgUrl = \"{HOSTING_BASE_URL}\";\n\
         export const baseImgUrlToken = (nameToken: string) => `${{baseImgUrl}}/token/${{nameToken}}.png`;\n"
    )));
}
