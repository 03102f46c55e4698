use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};

pub(crate) mod filters {
    /// Appends the build version to an asset path so a new release is not
    /// served from a stale browser cache.
    #[askama::filter_fn]
    pub fn asset(value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let version = askama::get_value::<String>(values, "version")?;

        Ok(format!("{value}?v={version}"))
    }
}

/// Renders askama pages with the values shared by every page.
pub struct Template {
    version: String,
}

impl Template {
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }

    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert("version", Box::new(self.version.to_owned()));

        template.render_with_values(&values)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        self.render_status(StatusCode::OK, template)
    }

    pub fn render_status<T: askama::Template>(&self, status: StatusCode, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!("Failed to render template: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> FromRequestParts<S> for Template
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Template::new())
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate;

#[macro_export]
macro_rules! try_page_response {
    (sync: $result:expr, $template:expr) => {
        match $result {
            Ok(r) => r,
            Err(err) => {
                tracing::error!("{err}");

                return $template.render_status(
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    $crate::template::ServerTemplate,
                );
            }
        }
    };

    ($result:expr, $template:expr) => {
        $crate::try_page_response!(sync: $result.await, $template)
    };
}
