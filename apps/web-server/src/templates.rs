//! Server-side HTML rendering for the poll pages.

use std::fmt::Write;

use agora_shared::{DetailContext, IndexContext, ResultsContext};

/// Shown on the index page when nothing is published.
pub const EMPTY_INDEX_MESSAGE: &str = "No blogs are available.";

/// Render the index page.
pub fn index(context: &IndexContext) -> String {
    let mut body = String::from("<h1>Latest questions</h1>\n");

    if context.latest_questions.is_empty() {
        let _ = writeln!(body, "<p>{}</p>", EMPTY_INDEX_MESSAGE);
    } else {
        body.push_str("<ul>\n");
        for question in &context.latest_questions {
            let _ = writeln!(
                body,
                "  <li><a href=\"{}\">{}</a></li>",
                detail_path(question.id),
                html_escape(&question.question_text)
            );
        }
        body.push_str("</ul>\n");
    }

    layout("Polls", &body)
}

/// Render the detail page with its voting form.
pub fn detail(context: &DetailContext) -> String {
    let question = &context.question;
    let mut body = format!("<h1>{}</h1>\n", html_escape(&question.question_text));

    if let Some(message) = &context.error_message {
        let _ = writeln!(
            body,
            "<p class=\"error\"><strong>{}</strong></p>",
            html_escape(message)
        );
    }

    let _ = writeln!(
        body,
        "<form action=\"{}\" method=\"post\">",
        votes_path(question.id)
    );
    for (index, choice) in context.choices.iter().enumerate() {
        let counter = index + 1;
        let _ = writeln!(
            body,
            "  <input type=\"radio\" name=\"choice\" id=\"choice{counter}\" value=\"{}\">\n  \
             <label for=\"choice{counter}\">{}</label><br>",
            choice.id,
            html_escape(&choice.choice_text)
        );
    }
    body.push_str("  <input type=\"submit\" value=\"Vote\">\n</form>\n");

    layout(&question.question_text, &body)
}

/// Render the results page.
pub fn results(context: &ResultsContext) -> String {
    let question = &context.question;
    let mut body = format!("<h1>{}</h1>\n<ul>\n", html_escape(&question.question_text));

    for choice in &context.choices {
        let _ = writeln!(
            body,
            "  <li>{} -- {} vote{}</li>",
            html_escape(&choice.choice_text),
            choice.votes,
            if choice.votes == 1 { "" } else { "s" }
        );
    }
    let _ = writeln!(
        body,
        "</ul>\n<p>{} total</p>\n<a href=\"{}\">Vote again?</a>",
        context.total_votes(),
        detail_path(question.id)
    );

    layout(&question.question_text, &body)
}

/// Render an error page.
pub fn error_page(status: u16, title: &str, detail: Option<&str>) -> String {
    let mut body = format!("<h1>{} {}</h1>\n", status, html_escape(title));
    if let Some(detail) = detail {
        let _ = writeln!(body, "<p>{}</p>", html_escape(detail));
    }
    body.push_str("<a href=\"/\">Back to the polls</a>\n");

    layout(title, &body)
}

pub fn detail_path(question_id: i32) -> String {
    format!("/{question_id}/")
}

pub fn results_path(question_id: i32) -> String {
    format!("/{question_id}/results/")
}

pub fn votes_path(question_id: i32) -> String {
    format!("/{question_id}/votes/")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        html_escape(title),
        body
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
