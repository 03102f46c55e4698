use axum::response::Redirect;

pub async fn page() -> Redirect {
    Redirect::to("/dashboard")
}
