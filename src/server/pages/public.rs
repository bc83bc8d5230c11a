use crate::error::FolioError;
use crate::server::router::FolioState;

use super::html::{escape, failure_page, layout, paragraphs};
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use folio_schema::{About, Experience, Skill, SkillCategory};
use std::fmt::Write as _;
use tracing::error;

/// GET /
pub async fn portfolio_page(State(state): State<FolioState>) -> Response {
    let services = &state.services;
    let loaded: Result<_, FolioError> = tokio::try_join!(
        services.skills.grouped(),
        services.experiences.list(),
        services.about.get(),
    );

    match loaded {
        Ok((skills, experiences, about)) => {
            let body = render(&skills, &experiences, about.as_ref());
            layout("Portfolio", &body).into_response()
        }
        Err(e) => {
            error!(error = %e, "failed to load portfolio page");
            failure_page("The portfolio could not be loaded.")
        }
    }
}

fn render(
    skills: &[(SkillCategory, Vec<Skill>)],
    experiences: &[Experience],
    about: Option<&About>,
) -> String {
    let mut body = String::from("<header><h1>Portfolio</h1></header>\n");

    body.push_str("<section id=\"about\">\n<h2>About</h2>\n");
    match about {
        Some(about) => {
            let _ = writeln!(body, "<p>{}</p>", paragraphs(&about.content));
        }
        None => body.push_str("<p class=\"muted\">Nothing here yet.</p>\n"),
    }
    body.push_str("</section>\n");

    body.push_str("<section id=\"skills\">\n<h2>Skills</h2>\n");
    if skills.is_empty() {
        body.push_str("<p class=\"muted\">No skills listed yet.</p>\n");
    }
    for (category, bucket) in skills {
        let _ = writeln!(body, "<h3>{category}</h3>\n<ul>");
        for skill in bucket {
            let _ = writeln!(body, "<li>{}</li>", escape(&skill.name));
        }
        body.push_str("</ul>\n");
    }
    body.push_str("</section>\n");

    body.push_str("<section id=\"experience\">\n<h2>Experience</h2>\n");
    if experiences.is_empty() {
        body.push_str("<p class=\"muted\">No experience listed yet.</p>\n");
    }
    for exp in experiences {
        let _ = writeln!(
            body,
            "<article>\n<h3>{} <span class=\"muted\">at {}</span></h3>\n<p class=\"muted\">{}</p>\n<p>{}</p>\n</article>",
            escape(&exp.title),
            escape(&exp.company),
            escape(&exp.period),
            paragraphs(&exp.description),
        );
    }
    body.push_str("</section>\n");
    body
}
