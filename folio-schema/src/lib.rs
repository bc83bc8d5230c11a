pub mod about;
pub mod auth;
pub mod common;
pub mod experience;
pub mod skill;

pub use about::{About, AboutUpdateRequest, NewAbout};
pub use auth::{LoginRequest, SessionResponse, SessionUser};
pub use common::{ErrorBody, SuccessBody};
pub use experience::{Experience, ExperienceChanges, NewExperience};
pub use skill::{
    NewSkill, Skill, SkillCategory, SkillChanges, SkillDeleteRequest, SkillUpdateRequest,
    UnknownSkillCategory,
};
