//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `patch.rs`: partial-update payloads and the `DbPatchable` contract
//! - `actor.rs`: the actor that owns the pool and runs every statement

pub mod actor;
pub mod models;
pub mod patch;
pub mod schema;

mod patch_impl;

pub use models::{DbAbout, DbExperience, DbSkill, DbUser};
pub use patch::{AboutPatch, DbPatchable, ExperiencePatch, SkillPatch, UserCreate};
pub use schema::SQLITE_INIT;

pub use actor::{DbActorHandle, spawn};
