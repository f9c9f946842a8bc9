use std::fs;

use nownext::config::Config;
use nownext::render::RenderStyle;
use nownext::storage::TaskFile;
use nownext::{StorageError, TaskStore};
use speculate2::speculate;
use tempfile::TempDir;

speculate! {
    before {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let file = TaskFile::in_dir(dir.path());
    }

    describe "task file" {
        it "starts empty when no file exists" {
            let store = file.load().expect("Failed to load");
            assert!(store.is_empty());
        }

        it "saves and reloads every tier" {
            let mut store = TaskStore::new();
            store.set_now("current").unwrap();
            store.set_next("queued").unwrap();
            store.append_soon("soon one").unwrap();
            store.append_later("later one").unwrap();

            file.save(&store).expect("Failed to save");
            let loaded = file.load().expect("Failed to load");

            assert_eq!(loaded, store);
        }

        it "reads a hand-written record" {
            fs::write(
                file.path(),
                "now: current task\nnext: next task\nsoon:\n  - one task\n  - two task\nlater: []\n",
            )
            .unwrap();

            let store = file.load().expect("Failed to load");
            assert_eq!(store.now().unwrap(), "current task");
            assert_eq!(store.next().unwrap(), "next task");
            assert_eq!(store.soon(), &["one task", "two task"]);
            assert!(store.later().is_empty());
        }

        it "writes absent tiers as missing keys" {
            let mut store = TaskStore::new();
            store.append_later("someday").unwrap();
            file.save(&store).unwrap();

            let content = fs::read_to_string(file.path()).unwrap();
            assert!(!content.contains("now:"));
            assert!(!content.contains("next:"));
        }

        it "fails on malformed yaml" {
            fs::write(file.path(), "now: [unclosed\n").unwrap();
            assert!(matches!(file.load(), Err(StorageError::Parse { .. })));
        }

        it "fails when soon or later is missing" {
            fs::write(file.path(), "now: current\n").unwrap();
            assert!(matches!(file.load(), Err(StorageError::Parse { .. })));
        }

        it "fails on an empty task description" {
            fs::write(file.path(), "now: ''\nsoon: []\nlater: []\n").unwrap();
            assert!(matches!(file.load(), Err(StorageError::InvalidRecord { .. })));
        }

        it "overwrites the previous record" {
            let mut store = TaskStore::new();
            store.set_now("first").unwrap();
            file.save(&store).unwrap();

            store.done("first");
            file.save(&store).unwrap();

            assert!(file.load().unwrap().is_empty());
        }
    }

    describe "config" {
        it "defaults to the plain style" {
            let config = Config::load(dir.path()).expect("Failed to load config");
            assert_eq!(config.style, RenderStyle::Plain);
        }

        it "reads the style by name" {
            fs::write(dir.path().join("config.yaml"), "style: json\n").unwrap();
            let config = Config::load(dir.path()).expect("Failed to load config");
            assert_eq!(config.style, RenderStyle::Json);
        }

        it "fails on malformed config" {
            fs::write(dir.path().join("config.yaml"), "style: [\n").unwrap();
            assert!(Config::load(dir.path()).is_err());
        }
    }
}
