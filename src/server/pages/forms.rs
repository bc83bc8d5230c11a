//! Targets of the dashboard forms. Each one redirects back to the dashboard,
//! flagging `?error=1` when the change was not applied.

use crate::error::FolioError;
use crate::server::router::FolioState;

use axum::{
    Form,
    extract::{Path, State, rejection::FormRejection},
    response::Redirect,
};
use folio_schema::{ExperienceChanges, NewAbout, NewExperience, NewSkill, SkillChanges};
use tracing::{error, warn};

const DASHBOARD: &str = "/admin/dashboard";
const DASHBOARD_ERROR: &str = "/admin/dashboard?error=1";

fn back_to_dashboard<T>(result: Result<T, FolioError>, action: &'static str) -> Redirect {
    match result {
        Ok(_) => Redirect::to(DASHBOARD),
        Err(e) => {
            error!(error = %e, "{action} failed");
            Redirect::to(DASHBOARD_ERROR)
        }
    }
}

fn form_body<T>(form: Result<Form<T>, FormRejection>, action: &'static str) -> Option<T> {
    match form {
        Ok(Form(value)) => Some(value),
        Err(rejection) => {
            warn!(error = %rejection, "{action}: rejected form");
            None
        }
    }
}

/// POST /admin/experiences
pub async fn create_experience(
    State(state): State<FolioState>,
    form: Result<Form<NewExperience>, FormRejection>,
) -> Redirect {
    let Some(create) = form_body(form, "create experience") else {
        return Redirect::to(DASHBOARD_ERROR);
    };
    back_to_dashboard(
        state.services.experiences.create(create).await,
        "create experience",
    )
}

/// POST /admin/experiences/{id}
pub async fn update_experience(
    State(state): State<FolioState>,
    Path(id): Path<String>,
    form: Result<Form<ExperienceChanges>, FormRejection>,
) -> Redirect {
    let Some(changes) = form_body(form, "update experience") else {
        return Redirect::to(DASHBOARD_ERROR);
    };
    back_to_dashboard(
        state.services.experiences.update(id, changes).await,
        "update experience",
    )
}

/// POST /admin/experiences/{id}/delete
pub async fn delete_experience(
    State(state): State<FolioState>,
    Path(id): Path<String>,
) -> Redirect {
    back_to_dashboard(
        state.services.experiences.delete(id).await,
        "delete experience",
    )
}

/// POST /admin/skills
pub async fn create_skill(
    State(state): State<FolioState>,
    form: Result<Form<NewSkill>, FormRejection>,
) -> Redirect {
    let Some(create) = form_body(form, "create skill") else {
        return Redirect::to(DASHBOARD_ERROR);
    };
    back_to_dashboard(state.services.skills.create(create).await, "create skill")
}

/// POST /admin/skills/{id}
pub async fn update_skill(
    State(state): State<FolioState>,
    Path(id): Path<String>,
    form: Result<Form<SkillChanges>, FormRejection>,
) -> Redirect {
    let Some(changes) = form_body(form, "update skill") else {
        return Redirect::to(DASHBOARD_ERROR);
    };
    back_to_dashboard(
        state.services.skills.update(id, changes).await,
        "update skill",
    )
}

/// POST /admin/skills/{id}/delete
pub async fn delete_skill(State(state): State<FolioState>, Path(id): Path<String>) -> Redirect {
    back_to_dashboard(state.services.skills.delete(id).await, "delete skill")
}

/// POST /admin/about
///
/// Creates the About row on first save and overwrites it afterwards.
pub async fn save_about(
    State(state): State<FolioState>,
    form: Result<Form<NewAbout>, FormRejection>,
) -> Redirect {
    let Some(NewAbout { content }) = form_body(form, "save about") else {
        return Redirect::to(DASHBOARD_ERROR);
    };
    back_to_dashboard(state.services.about.save(content).await, "save about")
}
