//! Domain services sitting between the HTTP layer and the database actor.
//!
//! Each service owns a clone of the `DbActorHandle`, converts rows into the
//! wire types from `folio-schema` and logs state changes.

mod about;
mod credentials;
mod experience;
mod skill;

pub use about::AboutService;
pub use credentials::CredentialService;
pub use experience::ExperienceService;
pub use skill::SkillService;

use crate::db::DbActorHandle;

/// Aggregate of every service, cloned into the axum state.
#[derive(Clone)]
pub struct Services {
    pub experiences: ExperienceService,
    pub skills: SkillService,
    pub about: AboutService,
    pub credentials: CredentialService,
}

impl Services {
    pub fn new(db: DbActorHandle) -> Self {
        Self {
            experiences: ExperienceService::new(db.clone()),
            skills: SkillService::new(db.clone()),
            about: AboutService::new(db.clone()),
            credentials: CredentialService::new(db),
        }
    }
}
