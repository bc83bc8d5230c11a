use crate::error::FolioError;
use crate::server::guards::RequirePageSession;
use crate::server::router::FolioState;

use super::PageFlags;
use super::html::{error_banner, escape, failure_page, layout};
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use folio_schema::{About, Experience, SessionUser, Skill, SkillCategory};
use std::fmt::Write as _;
use tracing::error;

/// GET /admin/dashboard
pub async fn dashboard_page(
    State(state): State<FolioState>,
    RequirePageSession(user): RequirePageSession,
    Query(flags): Query<PageFlags>,
) -> Response {
    let services = &state.services;
    let loaded: Result<_, FolioError> = tokio::try_join!(
        services.experiences.list(),
        services.skills.list(),
        services.about.get(),
    );

    match loaded {
        Ok((experiences, skills, about)) => {
            let body = render(&user, flags.has_error(), &experiences, &skills, about.as_ref());
            layout("Dashboard", &body).into_response()
        }
        Err(e) => {
            error!(error = %e, "failed to load dashboard");
            failure_page("The dashboard could not be loaded.")
        }
    }
}

fn category_options(selected: Option<SkillCategory>) -> String {
    let mut out = String::new();
    for category in SkillCategory::ALL {
        let attr = if Some(category) == selected { " selected" } else { "" };
        let _ = write!(out, r#"<option value="{category}"{attr}>{category}</option>"#);
    }
    out
}

fn experience_fields(exp: Option<&Experience>) -> String {
    let (title, company, period, description) = exp
        .map(|e| {
            (
                escape(&e.title),
                escape(&e.company),
                escape(&e.period),
                escape(&e.description),
            )
        })
        .unwrap_or_default();
    format!(
        r#"<p><label>Title <input name="title" required value="{title}"></label></p>
<p><label>Company <input name="company" required value="{company}"></label></p>
<p><label>Period <input name="period" required value="{period}"></label></p>
<p><label>Description<br><textarea name="description" rows="4" cols="60" required>{description}</textarea></label></p>"#
    )
}

fn render(
    user: &SessionUser,
    has_error: bool,
    experiences: &[Experience],
    skills: &[Skill],
    about: Option<&About>,
) -> String {
    let who = user.name.as_deref().unwrap_or(&user.email);
    let mut body = format!(
        r#"<header><h1>Dashboard</h1>
<p class="muted">Signed in as {}. <a href="/">View portfolio</a></p>
<form class="inline" method="post" action="/admin/logout"><button type="submit">Sign out</button></form>
</header>
"#,
        escape(who)
    );
    if has_error {
        body.push_str(&error_banner("The last change could not be saved."));
        body.push('\n');
    }

    // About
    let content = about.map(|a| escape(&a.content)).unwrap_or_default();
    let _ = write!(
        body,
        r#"<section id="about">
<h2>About</h2>
<form method="post" action="/admin/about">
<p><textarea name="content" rows="6" cols="60" required>{content}</textarea></p>
<p><button type="submit">Save</button></p>
</form>
</section>
"#
    );

    // Experiences
    body.push_str("<section id=\"experiences\">\n<h2>Experiences</h2>\n");
    for exp in experiences {
        let id = escape(&exp.id);
        let _ = write!(
            body,
            r#"<fieldset>
<form method="post" action="/admin/experiences/{id}">
{fields}
<p><button type="submit">Update</button></p>
</form>
<form class="inline" method="post" action="/admin/experiences/{id}/delete"><button type="submit">Delete</button></form>
</fieldset>
"#,
            fields = experience_fields(Some(exp)),
        );
    }
    let _ = write!(
        body,
        r#"<h3>New experience</h3>
<form method="post" action="/admin/experiences">
{fields}
<p><button type="submit">Add</button></p>
</form>
</section>
"#,
        fields = experience_fields(None),
    );

    // Skills
    body.push_str("<section id=\"skills\">\n<h2>Skills</h2>\n");
    for skill in skills {
        let id = escape(&skill.id);
        let _ = write!(
            body,
            r#"<fieldset>
<form class="inline" method="post" action="/admin/skills/{id}">
<input name="name" required value="{name}">
<select name="category">{options}</select>
<button type="submit">Update</button>
</form>
<form class="inline" method="post" action="/admin/skills/{id}/delete"><button type="submit">Delete</button></form>
</fieldset>
"#,
            name = escape(&skill.name),
            options = category_options(Some(skill.category)),
        );
    }
    let _ = write!(
        body,
        r#"<h3>New skill</h3>
<form method="post" action="/admin/skills">
<input name="name" required placeholder="Name">
<select name="category">{options}</select>
<button type="submit">Add</button>
</form>
</section>
"#,
        options = category_options(None),
    );

    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_category_is_marked() {
        let options = category_options(Some(SkillCategory::DevOps));
        assert!(options.contains(r#"<option value="DevOps" selected>DevOps</option>"#));
        assert!(options.contains(r#"<option value="Backend">Backend</option>"#));
    }

    #[test]
    fn error_banner_only_when_flagged() {
        let user = SessionUser {
            id: "u".to_string(),
            email: "owner@example.com".to_string(),
            name: None,
        };
        assert!(!render(&user, false, &[], &[], None).contains("banner error"));
        assert!(render(&user, true, &[], &[], None).contains("banner error"));
        assert!(render(&user, false, &[], &[], None).contains("Signed in as owner@example.com"));
    }
}
