mod common;

use axum::http::{StatusCode, header};
use common::{
    OWNER_EMAIL, OWNER_PASSWORD, body_string, form_request, json_request, login, send,
    session_cookie_pair, spawn_app,
};
use folio_schema::{NewExperience, NewSkill, SkillCategory};

fn location(resp: &axum::http::Response<axum::body::Body>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn public_page_renders_grouped_content() {
    let t = spawn_app("page-public").await;

    let resp = send(&t.app, json_request("GET", "/", None, None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;
    assert!(html.contains("Nothing here yet."));

    t.db.create_skill(NewSkill {
        name: "Rust".to_string(),
        category: SkillCategory::Backend,
    })
    .await
    .unwrap();
    t.db.create_experience(NewExperience {
        title: "Engineer".to_string(),
        company: "<Acme>".to_string(),
        period: "2020".to_string(),
        description: "Did work".to_string(),
    })
    .await
    .unwrap();
    t.db.create_about("About me".to_string()).await.unwrap();

    let html = body_string(send(&t.app, json_request("GET", "/", None, None)).await).await;
    assert!(html.contains("<h3>Backend</h3>"));
    assert!(html.contains("<li>Rust</li>"));
    assert!(html.contains("&lt;Acme&gt;"));
    assert!(html.contains("About me"));
    assert!(!html.contains("Nothing here yet."));
}

#[tokio::test]
async fn dashboard_requires_a_session() {
    let t = spawn_app("page-guard").await;

    let resp = send(&t.app, json_request("GET", "/admin/dashboard", None, None)).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin");

    let resp = send(
        &t.app,
        form_request("/admin/skills", "name=Go&category=Backend", None),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin");
    assert!(t.db.list_skills().await.unwrap().is_empty());

    let resp = send(&t.app, json_request("GET", "/admin", None, None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("action=\"/admin/login\""));
}

#[tokio::test]
async fn form_login_and_logout() {
    let t = spawn_app("page-login").await;

    let resp = send(
        &t.app,
        form_request("/admin/login", "email=owner%40example.com&password=nope", None),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin?error=1");
    assert!(session_cookie_pair(&resp).is_none());

    let resp = send(&t.app, json_request("GET", "/admin?error=1", None, None)).await;
    let html = body_string(resp).await;
    assert!(html.contains("Invalid email or password."));

    let body = format!(
        "email={}&password={}",
        OWNER_EMAIL.replace('@', "%40"),
        OWNER_PASSWORD.replace(' ', "+")
    );
    let resp = send(&t.app, form_request("/admin/login", &body, None)).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin/dashboard");
    let cookie = session_cookie_pair(&resp).unwrap();

    // Already signed in: the login page forwards to the dashboard.
    let resp = send(&t.app, json_request("GET", "/admin", None, Some(&cookie))).await;
    assert_eq!(location(&resp), "/admin/dashboard");

    let resp = send(&t.app, form_request("/admin/logout", "", Some(&cookie))).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin");
}

#[tokio::test]
async fn dashboard_forms_edit_every_record() {
    let t = spawn_app("page-forms").await;
    let cookie = login(&t.app).await;

    let resp = send(
        &t.app,
        form_request(
            "/admin/experiences",
            "title=Engineer&company=Acme&period=2021&description=Shipped",
            Some(&cookie),
        ),
    )
    .await;
    assert_eq!(location(&resp), "/admin/dashboard");
    let exp = t.db.list_experiences().await.unwrap().remove(0);

    let resp = send(
        &t.app,
        form_request(
            &format!("/admin/experiences/{}", exp.id),
            "title=Lead&company=Acme&period=2021&description=Shipped",
            Some(&cookie),
        ),
    )
    .await;
    assert_eq!(location(&resp), "/admin/dashboard");
    assert_eq!(t.db.list_experiences().await.unwrap()[0].title, "Lead");

    send(
        &t.app,
        form_request("/admin/skills", "name=Go&category=Backend", Some(&cookie)),
    )
    .await;
    let skill = t.db.list_skills().await.unwrap().remove(0);
    send(
        &t.app,
        form_request(
            &format!("/admin/skills/{}", skill.id),
            "name=Go&category=DevOps",
            Some(&cookie),
        ),
    )
    .await;
    assert_eq!(t.db.list_skills().await.unwrap()[0].category, "DevOps");

    // The about form creates on first save and overwrites afterwards.
    send(
        &t.app,
        form_request("/admin/about", "content=First", Some(&cookie)),
    )
    .await;
    send(
        &t.app,
        form_request("/admin/about", "content=Second", Some(&cookie)),
    )
    .await;
    assert_eq!(t.db.get_about().await.unwrap().unwrap().content, "Second");

    let resp = send(
        &t.app,
        json_request("GET", "/admin/dashboard", None, Some(&cookie)),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;
    assert!(html.contains("value=\"Lead\""));
    assert!(html.contains(r#"<option value="DevOps" selected>DevOps</option>"#));
    assert!(html.contains(">Second</textarea>"));

    send(
        &t.app,
        form_request(
            &format!("/admin/experiences/{}/delete", exp.id),
            "",
            Some(&cookie),
        ),
    )
    .await;
    send(
        &t.app,
        form_request(&format!("/admin/skills/{}/delete", skill.id), "", Some(&cookie)),
    )
    .await;
    assert!(t.db.list_experiences().await.unwrap().is_empty());
    assert!(t.db.list_skills().await.unwrap().is_empty());

    // A failed change comes back with the error flag.
    let resp = send(
        &t.app,
        form_request(&format!("/admin/skills/{}/delete", skill.id), "", Some(&cookie)),
    )
    .await;
    assert_eq!(location(&resp), "/admin/dashboard?error=1");
    let html = body_string(
        send(
            &t.app,
            json_request("GET", "/admin/dashboard?error=1", None, Some(&cookie)),
        )
        .await,
    )
    .await;
    assert!(html.contains("The last change could not be saved."));
}
