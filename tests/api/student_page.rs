use std::sync::Arc;

use axum::{extract::Request, response::Html};
use student_info::app::{
    hello::schema::StudentInfoContext,
    template::{RenderError, TemplateRenderer},
};

use crate::helper::{spawn_app, spawn_app_with_renderer};

struct MissingTemplateRenderer;

impl TemplateRenderer for MissingTemplateRenderer {
    fn render(
        &self,
        _request: &Request,
        template_name: &str,
        _context: &StudentInfoContext,
    ) -> Result<Html<String>, RenderError> {
        Err(RenderError::TemplateNotFound(template_name.to_owned()))
    }
}

struct FixedRenderer;

impl TemplateRenderer for FixedRenderer {
    fn render(
        &self,
        _request: &Request,
        _template_name: &str,
        _context: &StudentInfoContext,
    ) -> Result<Html<String>, RenderError> {
        Ok(Html("<html>OK</html>".to_owned()))
    }
}

#[tokio::test]
async fn student_info_returns_200_with_an_html_page() {
    let app = spawn_app().await;

    let response = app.get_student_info().await;

    assert_eq!(200, response.status().as_u16());
    let content_type = response
        .headers()
        .get("content-type")
        .expect("The response should have a content type.")
        .to_str()
        .unwrap()
        .to_owned();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn student_info_shows_the_hardcoded_student() {
    let app = spawn_app().await;

    let body = app.get_student_info().await.text().await.unwrap();

    assert!(body.contains("Prince Raj Kiran"));
    assert!(body.contains("2403051050507"));
    assert!(body.contains("Computer Science &amp; Engineering"));
    assert!(body.contains("4th"));
}

#[tokio::test]
async fn student_info_returns_the_renderer_output_as_is() {
    let app = spawn_app_with_renderer(Arc::new(FixedRenderer)).await;

    let body = app.get_student_info().await.text().await.unwrap();

    assert_eq!(body, "<html>OK</html>");
}

#[tokio::test]
async fn student_info_returns_500_when_the_template_is_missing() {
    let app = spawn_app_with_renderer(Arc::new(MissingTemplateRenderer)).await;

    let response = app.get_student_info().await;

    assert_eq!(500, response.status().as_u16());
}
