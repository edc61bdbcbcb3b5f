//! Contact pages

use axum::response::Html;

use super::{delete_button, error_list, escape, hidden_input, layout, path_segment, text_input};
use crate::models::{Contact, ContactForm};
use crate::validation::FieldError;

fn fields(form: &ContactForm) -> String {
    [
        text_input("Name", "name", "text", &form.name),
        text_input("Email", "email", "email", &form.email),
        text_input("Mobile number", "phone", "text", &form.phone),
    ]
    .concat()
}

/// GET /contact
pub fn list(contacts: &[Contact], flash: Option<&str>) -> Html<String> {
    let rows: String = if contacts.is_empty() {
        r#"<tr><td colspan="4">No contacts yet.</td></tr>"#.to_string()
    } else {
        contacts
            .iter()
            .enumerate()
            .map(|(i, c)| {
                format!(
                    r#"<tr>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
                <td><a href="/contact/{}" class="button">Detail</a></td>
            </tr>"#,
                    i + 1,
                    escape(&c.name),
                    escape(&c.email),
                    path_segment(&c.name),
                )
            })
            .collect()
    };

    let body = format!(
        r#"<a href="/contact/add" class="button">Add contact</a>
        <table>
            <thead><tr><th>#</th><th>Name</th><th>Email</th><th></th></tr></thead>
            <tbody>{}</tbody>
        </table>"#,
        rows
    );
    layout("Contact", flash, &body)
}

/// GET /contact/add, and POST /contact on validation failure
pub fn add_form(form: &ContactForm, errors: &[FieldError]) -> Html<String> {
    let body = format!(
        r#"{errors}
        <form method="post" action="/contact">
            {fields}
            <button type="submit" class="button">Add contact</button>
            <a href="/contact" class="button">Back</a>
        </form>"#,
        errors = error_list(errors),
        fields = fields(form),
    );
    layout("Add Contact", None, &body)
}

/// GET /contact/edit/:key, and PUT /contact on validation failure
pub fn edit_form(form: &ContactForm, errors: &[FieldError]) -> Html<String> {
    let body = format!(
        r#"{errors}
        <form method="post" action="/contact?_method=PUT">
            {id}
            {fields}
            <button type="submit" class="button">Save changes</button>
            <a href="/contact" class="button">Back</a>
        </form>"#,
        errors = error_list(errors),
        id = hidden_input("id", form.id.as_deref().unwrap_or_default()),
        fields = fields(form),
    );
    layout("Edit Contact", None, &body)
}

/// GET /contact/:key
pub fn detail(contact: &Contact) -> Html<String> {
    let body = format!(
        r#"<table>
            <tr><th>Name</th><td>{name}</td></tr>
            <tr><th>Email</th><td>{email}</td></tr>
            <tr><th>Mobile number</th><td>{phone}</td></tr>
        </table>
        <a href="/contact/edit/{key}" class="button">Edit</a>
        {delete}
        <a href="/contact" class="button">Back</a>"#,
        name = escape(&contact.name),
        email = escape(&contact.email),
        phone = escape(&contact.phone),
        key = path_segment(&contact.name),
        delete = delete_button("/contact", &hidden_input("name", &contact.name), "contact"),
    );
    layout("Contact Detail", None, &body)
}
