//! Initiative Tracker Core
//!
//! Character model, hit point rules, initiative ordering, and the locally
//! persisted character store.

pub mod config;
pub mod error;
pub mod hit_points;
pub mod input;
pub mod invariants;
pub mod models;
pub mod ordering;
pub mod roster;
pub mod storage;

pub use config::TrackerConfig;
pub use error::{Error, Result};
pub use hit_points::{apply_damage, apply_heal, HitPoints, HpChange};
pub use models::*;
pub use roster::CharacterStore;
pub use storage::{Database, KeyValueStore, KvStore, MemoryStore};
