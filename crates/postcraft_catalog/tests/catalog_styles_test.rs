//! Tests for the style preset catalog.

use postcraft_catalog::StylePresetCatalog;
use postcraft_error::{BackendError, PostcraftResult};
use postcraft_interface::KeyValueStore;
use postcraft_storage::InMemoryStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> PostcraftResult<Option<String>> {
        Err(BackendError::new("store offline").into())
    }

    fn set(&self, _key: &str, _value: &str) -> PostcraftResult<()> {
        Err(BackendError::new("store offline").into())
    }
}

/// In-memory store whose reads can be switched off.
struct FlakyStore {
    inner: InMemoryStore,
    reads_fail: AtomicBool,
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> PostcraftResult<Option<String>> {
        if self.reads_fail.load(Ordering::SeqCst) {
            return Err(BackendError::new("read timed out").into());
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> PostcraftResult<()> {
        self.inner.set(key, value)
    }
}

#[test]
fn test_bundled_has_eleven_presets_in_order() {
    let catalog = StylePresetCatalog::bundled();
    let ids: Vec<String> = catalog
        .all_configs()
        .iter()
        .map(|c| c.id().clone())
        .collect();

    assert_eq!(ids.len(), 11);
    assert_eq!(ids[0], "xiaohongshu");
    assert!(ids.contains(&"ins_minimal".to_string()));
    assert!(ids.contains(&"retro_vintage".to_string()));
}

#[test]
fn test_unknown_style_is_empty() {
    let catalog = StylePresetCatalog::bundled();
    assert_eq!(catalog.style_prompt("does_not_exist"), "");
    assert!(catalog.config("does_not_exist").is_none());
    assert!(catalog.name("does_not_exist").is_none());
}

#[test]
fn test_name_lookup() {
    let catalog = StylePresetCatalog::bundled();
    assert_eq!(catalog.name("ins_minimal"), Some("INS 极简"));
}

#[test]
fn test_override_takes_priority_and_persists_as_json_map() {
    let store = Arc::new(InMemoryStore::new());
    let catalog = StylePresetCatalog::bundled().with_store(store.clone(), "overrides");

    catalog.save_custom_prompt("morandi", "  雾霾蓝为主  ");

    assert_eq!(catalog.style_prompt("morandi"), "雾霾蓝为主");
    let config = catalog.config("morandi").unwrap();
    assert_eq!(config.custom_prompt().as_deref(), Some("雾霾蓝为主"));

    let raw = store.get("overrides").unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["morandi"]["customPrompt"], "雾霾蓝为主");
}

#[test]
fn test_blank_save_clears_override() {
    let catalog = StylePresetCatalog::bundled();
    let default_prompt = catalog.style_prompt("dopamine");

    catalog.save_custom_prompt("dopamine", "高饱和撞色");
    catalog.save_custom_prompt("dopamine", "   ");

    assert_eq!(catalog.style_prompt("dopamine"), default_prompt);
    assert!(catalog.config("dopamine").unwrap().custom_prompt().is_none());
}

#[test]
fn test_reset_restores_default() {
    let catalog = StylePresetCatalog::bundled();
    let default_prompt = catalog.style_prompt("cyberpunk");

    catalog.save_custom_prompt("cyberpunk", "霓虹雨夜");
    catalog.reset_custom_prompt("cyberpunk");

    assert_eq!(catalog.style_prompt("cyberpunk"), default_prompt);
}

#[test]
fn test_overrides_shared_through_store() {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
    let writer = StylePresetCatalog::bundled().with_store(store.clone(), "k");
    let reader = StylePresetCatalog::bundled().with_store(store, "k");

    writer.save_custom_prompt("black_gold", "暗金质感");

    assert_eq!(reader.style_prompt("black_gold"), "暗金质感");
}

#[test]
fn test_store_failures_degrade_to_defaults() {
    let catalog = StylePresetCatalog::bundled().with_store(Arc::new(FailingStore), "k");

    catalog.save_custom_prompt("morandi", "不会保存");

    let prompt = catalog.style_prompt("morandi");
    assert!(!prompt.is_empty());
    assert_ne!(prompt, "不会保存");
}

#[test]
fn test_corrupt_overrides_are_ignored() {
    let store = Arc::new(InMemoryStore::new());
    store.set("k", "{not json").unwrap();
    let catalog = StylePresetCatalog::bundled().with_store(store, "k");

    assert!(catalog.config("morandi").unwrap().custom_prompt().is_none());
}

#[test]
fn test_from_toml() {
    let catalog = StylePresetCatalog::from_toml(
        r#"
[[style]]
id = "plain"
name = "朴素"
description = "无装饰"
prompt = "plain prompt"
"#,
    )
    .unwrap();

    assert_eq!(catalog.all_configs().len(), 1);
    assert_eq!(catalog.style_prompt("plain"), "plain prompt");
    assert!(StylePresetCatalog::from_toml("not = [valid").is_err());
}

#[test]
fn test_failed_read_does_not_overwrite_other_overrides() {
    let store = Arc::new(FlakyStore {
        inner: InMemoryStore::new(),
        reads_fail: AtomicBool::new(false),
    });
    let catalog = StylePresetCatalog::bundled().with_store(store.clone(), "overrides");
    catalog.save_custom_prompt("ins_minimal", "我的极简");

    store.reads_fail.store(true, Ordering::SeqCst);
    catalog.save_custom_prompt("morandi", "我的莫兰迪");
    catalog.reset_custom_prompt("ins_minimal");
    store.reads_fail.store(false, Ordering::SeqCst);

    assert_eq!(catalog.style_prompt("ins_minimal"), "我的极简");
    assert!(catalog.config("morandi").unwrap().custom_prompt().is_none());
    let raw = store.inner.get("overrides").unwrap().unwrap();
    assert!(raw.contains("我的极简"));
    assert!(!raw.contains("我的莫兰迪"));
}
