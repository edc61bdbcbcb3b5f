//! HTML views
//!
//! Every page is rendered into the shared layout: navigation bar, page title,
//! optional flash alert, then the page body. All user-supplied text goes
//! through [`escape`] before it reaches the markup.

pub mod addresses;
pub mod contacts;
pub mod pages;
pub mod program_studies;

use axum::response::Html;
use std::borrow::Cow;

use crate::validation::FieldError;

const STYLE: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #1a1a1a;
            color: #e0e0e0;
            line-height: 1.6;
        }
        nav {
            background-color: #2a2a2a;
            border-bottom: 1px solid #3a3a3a;
            padding: 15px 20px;
            display: flex;
            gap: 20px;
        }
        nav a {
            color: #e0e0e0;
            text-decoration: none;
            font-weight: 600;
        }
        nav a.brand {
            color: #4a9eff;
            margin-right: auto;
        }
        .content {
            padding: 20px;
            max-width: 960px;
        }
        h1 {
            font-size: 26px;
            margin-bottom: 15px;
            color: #4a9eff;
        }
        table {
            width: 100%;
            border-collapse: collapse;
            margin: 15px 0;
        }
        th, td {
            text-align: left;
            padding: 8px;
            border-bottom: 1px solid #3a3a3a;
        }
        .alert {
            padding: 10px 15px;
            border-radius: 4px;
            margin-bottom: 15px;
        }
        .alert-success {
            background: #10b981;
            color: #fff;
        }
        .alert-error {
            background: #ef4444;
            color: #fff;
        }
        .alert-error ul {
            margin-left: 20px;
        }
        label {
            display: block;
            margin-top: 10px;
        }
        input[type=text], input[type=email] {
            width: 100%;
            padding: 8px;
            background: #2a2a2a;
            color: #e0e0e0;
            border: 1px solid #3a3a3a;
            border-radius: 4px;
        }
        .button {
            display: inline-block;
            padding: 8px 16px;
            background: #4a9eff;
            color: white;
            text-decoration: none;
            border: none;
            border-radius: 4px;
            margin: 10px 5px 10px 0;
            font-weight: 600;
            cursor: pointer;
        }
        .button-danger {
            background: #ef4444;
        }
        form.inline {
            display: inline;
        }
"#;

/// Escape text for use in element content and quoted attribute values
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

/// Percent-encode a value used as one URL path segment
pub fn path_segment(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}

/// Wrap a page body in the shared layout
pub fn layout(title: &str, flash: Option<&str>, body: &str) -> Html<String> {
    let title = escape(title);
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{style}</style>
</head>
<body>
    <nav>
        <a class="brand" href="/">Kontak</a>
        <a href="/">Home</a>
        <a href="/about">About</a>
        <a href="/contact">Contact</a>
        <a href="/program-study">Program Study</a>
        <a href="/address">Address</a>
    </nav>
    <div class="content">
        <h1>{title}</h1>
        {flash}
        {body}
    </div>
</body>
</html>"#,
        title = title,
        style = STYLE,
        flash = flash_alert(flash),
        body = body,
    ))
}

/// Success alert for a pending flash message
pub fn flash_alert(message: Option<&str>) -> String {
    match message {
        Some(message) if !message.is_empty() => format!(
            r#"<div class="alert alert-success" role="alert">{}</div>"#,
            escape(message)
        ),
        _ => String::new(),
    }
}

/// Error alert listing field failures
pub fn error_list(errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let items: String = errors
        .iter()
        .map(|e| {
            format!(
                r#"<li data-field="{}">{}</li>"#,
                e.field,
                escape(&e.message)
            )
        })
        .collect();

    format!(
        r#"<div class="alert alert-error" role="alert"><ul>{}</ul></div>"#,
        items
    )
}

/// Labelled single-line text input
pub(crate) fn text_input(label: &str, name: &str, kind: &str, value: &str) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
        <input type="{kind}" id="{name}" name="{name}" value="{value}">"#,
        name = name,
        label = label,
        kind = kind,
        value = escape(value),
    )
}

/// Hidden input carrying a key through a form submission
pub(crate) fn hidden_input(name: &str, value: &str) -> String {
    format!(
        r#"<input type="hidden" name="{}" value="{}">"#,
        name,
        escape(value)
    )
}

/// POST form tunnelled to DELETE via `_method`
pub(crate) fn delete_button(action: &str, hidden: &str, what: &str) -> String {
    format!(
        r#"<form class="inline" method="post" action="{action}?_method=DELETE" onsubmit="return confirm('Delete this {what}?');">
            {hidden}
            <button type="submit" class="button button-danger">Delete</button>
        </form>"#,
        action = action,
        hidden = hidden,
        what = what,
    )
}
