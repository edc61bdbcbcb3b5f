//! Address pages

use axum::response::Html;

use super::{delete_button, error_list, escape, hidden_input, layout, text_input};
use crate::models::{Address, AddressForm};
use crate::validation::FieldError;

fn fields(form: &AddressForm) -> String {
    [
        text_input("City", "city", "text", &form.city),
        text_input("Street", "street", "text", &form.street),
        text_input("RT", "block", "text", &form.block),
        text_input("RW", "sub_block", "text", &form.sub_block),
        text_input("Postal code", "postal_code", "text", &form.postal_code),
        text_input("Mobile number", "phone", "text", &form.phone),
    ]
    .concat()
}

/// GET /address
pub fn list(addresses: &[Address], flash: Option<&str>) -> Html<String> {
    let rows: String = if addresses.is_empty() {
        r#"<tr><td colspan="5">No addresses yet.</td></tr>"#.to_string()
    } else {
        addresses
            .iter()
            .enumerate()
            .map(|(i, a)| {
                format!(
                    r#"<tr>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
                <td><a href="/address/{}" class="button">Detail</a></td>
            </tr>"#,
                    i + 1,
                    escape(&a.city),
                    escape(&a.street),
                    escape(&a.postal_code),
                    a.id,
                )
            })
            .collect()
    };

    let body = format!(
        r#"<a href="/address/add" class="button">Add address</a>
        <table>
            <thead><tr><th>#</th><th>City</th><th>Street</th><th>Postal code</th><th></th></tr></thead>
            <tbody>{}</tbody>
        </table>"#,
        rows
    );
    layout("Address", flash, &body)
}

/// GET /address/add, and POST /address on validation failure
pub fn add_form(form: &AddressForm, errors: &[FieldError]) -> Html<String> {
    let body = format!(
        r#"{errors}
        <form method="post" action="/address">
            {fields}
            <button type="submit" class="button">Add address</button>
            <a href="/address" class="button">Back</a>
        </form>"#,
        errors = error_list(errors),
        fields = fields(form),
    );
    layout("Add Address", None, &body)
}

/// GET /address/edit/:id, and PUT /address on validation failure
pub fn edit_form(form: &AddressForm, errors: &[FieldError]) -> Html<String> {
    let body = format!(
        r#"{errors}
        <form method="post" action="/address?_method=PUT">
            {id}
            {fields}
            <button type="submit" class="button">Save changes</button>
            <a href="/address" class="button">Back</a>
        </form>"#,
        errors = error_list(errors),
        id = hidden_input("id", form.id.as_deref().unwrap_or_default()),
        fields = fields(form),
    );
    layout("Edit Address", None, &body)
}

/// GET /address/:id
pub fn detail(address: &Address) -> Html<String> {
    let body = format!(
        r#"<table>
            <tr><th>City</th><td>{city}</td></tr>
            <tr><th>Street</th><td>{street}</td></tr>
            <tr><th>RT / RW</th><td>{block} / {sub_block}</td></tr>
            <tr><th>Postal code</th><td>{postal_code}</td></tr>
            <tr><th>Mobile number</th><td>{phone}</td></tr>
        </table>
        <a href="/address/edit/{id}" class="button">Edit</a>
        {delete}
        <a href="/address" class="button">Back</a>"#,
        city = escape(&address.city),
        street = escape(&address.street),
        block = escape(&address.block),
        sub_block = escape(&address.sub_block),
        postal_code = escape(&address.postal_code),
        phone = escape(&address.phone),
        id = address.id,
        delete = delete_button(&format!("/address/{}", address.id), "", "address"),
    );
    layout("Address Detail", None, &body)
}
