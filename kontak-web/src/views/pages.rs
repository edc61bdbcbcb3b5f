//! Static pages and error pages

use axum::response::Html;

use super::{escape, layout};

/// Project team shown on the home page: (name, student number, email)
pub const TEAM: [(&str, &str, &str); 3] = [
    ("Ruben Setiaji", "535220033", "ruben@untar.ac.id"),
    ("Benny Dwiyanto", "535220012", "benny@untar.ac.id"),
    ("Raka Naufal", "535220006", "raka@untar.ac.id"),
];

/// GET /
pub fn home() -> Html<String> {
    let rows: String = TEAM
        .iter()
        .enumerate()
        .map(|(i, (name, student_no, email))| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                i + 1,
                escape(name),
                escape(student_no),
                escape(email)
            )
        })
        .collect();

    let body = format!(
        r#"<p>Kontak keeps the department's contacts, study programs and addresses in one place.</p>
        <p>
            <a href="/contact" class="button">Contacts</a>
            <a href="/program-study" class="button">Study Programs</a>
            <a href="/address" class="button">Addresses</a>
        </p>
        <table>
            <thead><tr><th>#</th><th>Name</th><th>Student number</th><th>Email</th></tr></thead>
            <tbody>{}</tbody>
        </table>"#,
        rows
    );
    layout("Home", None, &body)
}

/// GET /about
pub fn about() -> Html<String> {
    let body = format!(
        r#"<p>Kontak is a small form-driven directory. Every change is validated,
        saved, and confirmed with a one-time message on the next page.</p>
        <p>Version {}</p>"#,
        env!("CARGO_PKG_VERSION")
    );
    layout("About", None, &body)
}

/// 404 page for a missing record or route
pub fn not_found(what: &str) -> Html<String> {
    let body = format!(
        r#"<p>{}</p>
        <a href="/" class="button">Back to home</a>"#,
        escape(what)
    );
    layout("Not Found", None, &body)
}

/// Generic 500 page; never carries internal detail
pub fn server_error() -> Html<String> {
    layout(
        "Internal Server Error",
        None,
        r#"<p>Something went wrong while handling your request. Please try again later.</p>"#,
    )
}
