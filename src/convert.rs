// Markdown to HTML converter.
use crate::error::Error;

use pulldown_cmark::{html, Options, Parser};
use tokio::{
    task::spawn_blocking,
    time::{timeout, Duration},
};

fn render(markdown: &str) -> String {
    let options = Options::all();
    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Converts on a blocking task so a panic or a pathological document cannot
/// take the worker down with it; both surface as a conversion error.
pub async fn to_html(markdown: String) -> Result<String, Error> {
    let task = spawn_blocking(move || render(&markdown));

    match timeout(Duration::from_secs(5), task).await {
        Err(_) => Err(Error::Convert(String::from("took longer than 5 seconds"))),
        Ok(Err(e)) => Err(Error::Convert(e.to_string())),
        Ok(Ok(html)) => Ok(html),
    }
}

#[actix_web::test]
async fn test_heading_conversion() {
    let html = to_html(String::from("# Hello")).await.unwrap();
    assert!(html.contains("<h1>Hello</h1>"));
}

#[actix_web::test]
async fn test_tables_are_enabled() {
    let html = to_html(String::from("| a |\n| - |\n| 1 |")).await.unwrap();
    assert!(html.contains("<table>"));
}

#[actix_web::test]
async fn test_inline_html_passes_through_unsanitized() {
    let html = to_html(String::from("before <em>kept</em> after"))
        .await
        .unwrap();
    assert!(html.contains("<em>kept</em>"));
}
