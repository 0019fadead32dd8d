//! HTML pages.
//!
//! Pages are rendered with `format!` into a shared layout. Every value that
//! originates from a user or the database passes through [`escape`].

use axum::{http::StatusCode, response::Html};

use crate::domain::{Case, DashboardMetrics, Session};

/// Escape text for inclusion in HTML content or a quoted attribute.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | Justice Cloud</title>
</head>
<body>
{body}
</body>
</html>
"#
    ))
}

fn nav() -> &'static str {
    r#"<nav>
<a href="/dashboard">Dashboard</a>
<a href="/add_case">Add case</a>
<a href="/view_cases">View cases</a>
<a href="/report">Court report</a>
<a href="/logout">Logout</a>
</nav>"#
}

/// Login form. A rejected attempt gets the same page back, without a hint.
pub fn login_page() -> Html<String> {
    layout(
        "Login",
        r#"<h1>Login</h1>
<form method="post" action="/login">
<label>Username <input type="text" name="username" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">Login</button>
</form>"#,
    )
}

pub fn dashboard_page(session: &Session, metrics: &DashboardMetrics) -> Html<String> {
    layout(
        "Dashboard",
        &format!(
            r#"{nav}
<h1>Dashboard</h1>
<p>Logged in as <strong>{username}</strong> ({role})</p>
<table>
<tr><th>Total cases</th><td id="total">{total}</td></tr>
<tr><th>Open cases</th><td id="open">{open}</td></tr>
<tr><th>Closed cases</th><td id="closed">{closed}</td></tr>
<tr><th>Closure prediction</th><td id="prediction">{prediction}% ({precise:.2}%)</td></tr>
</table>"#,
            nav = nav(),
            username = escape(&session.username),
            role = session.role,
            total = metrics.total,
            open = metrics.open,
            closed = metrics.closed,
            prediction = metrics.prediction,
            precise = metrics.prediction_precise(),
        ),
    )
}

pub fn add_case_page() -> Html<String> {
    layout(
        "Add case",
        &format!(
            r#"{nav}
<h1>Add case</h1>
<form method="post" action="/add_case" enctype="multipart/form-data">
<label>Case number <input type="text" name="case_number" required></label>
<label>Client name <input type="text" name="client_name" required></label>
<label>Case type <input type="text" name="case_type"></label>
<label>Hearing date <input type="date" name="hearing_date"></label>
<label>Status
<select name="status">
<option value="Open">Open</option>
<option value="Closed">Closed</option>
</select>
</label>
<label>Document <input type="file" name="file"></label>
<button type="submit">Save</button>
</form>"#,
            nav = nav(),
        ),
    )
}

/// Case table with a search box pre-filled with the current term.
pub fn cases_page(cases: &[Case], search: Option<&str>) -> Html<String> {
    let rows: String = cases.iter().map(case_row).collect();

    layout(
        "Cases",
        &format!(
            r#"{nav}
<h1>Cases</h1>
<form method="get" action="/view_cases">
<input type="text" name="search" value="{search}" placeholder="Case number">
<button type="submit">Search</button>
</form>
<table>
<thead>
<tr><th>Case number</th><th>Client</th><th>Type</th><th>Hearing date</th><th>Status</th><th>Document</th></tr>
</thead>
<tbody>
{rows}</tbody>
</table>"#,
            nav = nav(),
            search = escape(search.unwrap_or_default()),
        ),
    )
}

fn case_row(case: &Case) -> String {
    let document = case
        .attachment()
        .map(|name| {
            let name = escape(name);
            format!(r#"<a href="/static/uploads/{name}">{name}</a>"#)
        })
        .unwrap_or_default();

    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        escape(&case.case_number),
        escape(&case.client_name),
        escape(&case.case_type),
        escape(&case.hearing_date),
        escape(&case.status),
        document,
    )
}

/// Error page used by every failed request.
pub fn error_page(status: StatusCode, code: &str, message: &str) -> Html<String> {
    let reason = status.canonical_reason().unwrap_or("Error");

    layout(
        reason,
        &format!(
            r#"<h1>{status} {reason}</h1>
<p class="error" data-code="{code}">{message}</p>
<p><a href="/dashboard">Back to dashboard</a></p>"#,
            status = status.as_u16(),
            message = escape(message),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRole;

    fn case(number: &str, document: &str) -> Case {
        Case {
            id: 1,
            case_number: number.into(),
            client_name: "Jane Doe".into(),
            case_type: "Civil".into(),
            hearing_date: "2024-05-01".into(),
            status: "Open".into(),
            document: document.into(),
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">O'Neil & co</a>"#),
            "&lt;a href=&quot;x&quot;&gt;O&#x27;Neil &amp; co&lt;/a&gt;"
        );
    }

    #[test]
    fn test_dashboard_shows_identity_and_counts() {
        let session = Session {
            username: "admin".into(),
            role: UserRole::Administrator,
        };
        let Html(body) = dashboard_page(&session, &DashboardMetrics::from_counts(3, 1, 2));

        assert!(body.contains("<strong>admin</strong> (Administrator)"));
        assert!(body.contains(r#"<td id="total">3</td>"#));
        assert!(body.contains("67% (66.67%)"));
    }

    #[test]
    fn test_case_rows_link_documents_and_escape_fields() {
        let Html(body) = cases_page(
            &[case("<C-1>", "brief.pdf"), case("C-2", "")],
            Some("C-\"1"),
        );

        assert!(body.contains("&lt;C-1&gt;"));
        assert!(!body.contains("<C-1>"));
        assert!(body.contains(r#"<a href="/static/uploads/brief.pdf">brief.pdf</a>"#));
        assert_eq!(body.matches("/static/uploads/").count(), 1);
        assert!(body.contains(r#"value="C-&quot;1""#));
    }

    #[test]
    fn test_login_page_has_no_error_line() {
        let Html(body) = login_page();
        assert!(body.contains(r#"action="/login""#));
        assert!(!body.contains(r#"class="error""#));
    }
}
