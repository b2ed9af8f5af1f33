use askama::Template;
use axum::{extract::Request, response::Html};

use super::hello::schema::StudentInfoContext;
use crate::domain::StudentRecord;

pub const STUDENT_INFO_TEMPLATE: &str = "hello/student_info.html";

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("template not found: {0}")]
    TemplateNotFound(String),
    #[error(transparent)]
    Render(#[from] askama::Error),
}

/// Turns a named template and its context into an HTML page.
///
/// The request is handed over so that a renderer can expose request data to the
/// template. Implementations must not change it.
pub trait TemplateRenderer: Send + Sync + 'static {
    fn render(
        &self,
        request: &Request,
        template_name: &str,
        context: &StudentInfoContext,
    ) -> Result<Html<String>, RenderError>;
}

#[derive(Template)]
#[template(path = "hello/student_info.html")]
struct StudentInfoTemplate<'a> {
    student_data: &'a StudentRecord,
    request_path: &'a str,
}

/// Renders the compiled askama templates shipped with the crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct AskamaRenderer;

impl TemplateRenderer for AskamaRenderer {
    #[tracing::instrument(name = "Render template", skip(self, request, context))]
    fn render(
        &self,
        request: &Request,
        template_name: &str,
        context: &StudentInfoContext,
    ) -> Result<Html<String>, RenderError> {
        match template_name {
            STUDENT_INFO_TEMPLATE => {
                let page = StudentInfoTemplate {
                    student_data: &context.student_data,
                    request_path: request.uri().path(),
                }
                .render()?;
                Ok(Html(page))
            }
            other => Err(RenderError::TemplateNotFound(other.to_owned())),
        }
    }
}
