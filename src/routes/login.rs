use axum::response::IntoResponse;

use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "login.html")]
pub struct LoginTemplate;

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(LoginTemplate)
}
