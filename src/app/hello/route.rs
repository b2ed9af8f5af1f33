use axum::{
    extract::{Request, State},
    response::Html,
};

use super::schema::StudentInfoContext;
use crate::{
    app::{
        error::AppResult,
        template::{RenderError, TemplateRenderer, STUDENT_INFO_TEMPLATE},
        AppState,
    },
    domain::StudentRecord,
};

/// Renders the student info page with whatever `renderer` is given.
///
/// The renderer's output, or its error, is returned as is.
pub fn render_student_info<R>(
    renderer: &R,
    request: &Request,
) -> Result<Html<String>, RenderError>
where
    R: TemplateRenderer + ?Sized,
{
    let context = StudentInfoContext {
        student_data: StudentRecord::hardcoded(),
    };

    renderer.render(request, STUDENT_INFO_TEMPLATE, &context)
}

#[tracing::instrument(name = "Student info page", skip(state, request))]
pub async fn student_info(
    State(state): State<AppState>,
    request: Request,
) -> AppResult<Html<String>> {
    Ok(render_student_info(state.renderer.as_ref(), &request)?)
}
