//! Study program pages

use axum::response::Html;

use super::{delete_button, error_list, escape, layout, path_segment, text_input};
use crate::models::{ProgramStudy, ProgramStudyForm};
use crate::validation::FieldError;

fn fields(form: &ProgramStudyForm) -> String {
    [
        text_input("Program name", "name", "text", &form.name),
        text_input("Faculty", "faculty", "text", &form.faculty),
        text_input("Accreditation", "accreditation", "text", &form.accreditation),
    ]
    .concat()
}

/// GET /program-study
pub fn list(programs: &[ProgramStudy], flash: Option<&str>) -> Html<String> {
    let rows: String = if programs.is_empty() {
        r#"<tr><td colspan="5">No study programs yet.</td></tr>"#.to_string()
    } else {
        programs
            .iter()
            .enumerate()
            .map(|(i, p)| {
                format!(
                    r#"<tr>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
                <td><a href="/program-study/{}" class="button">Detail</a></td>
            </tr>"#,
                    i + 1,
                    escape(&p.name),
                    escape(&p.faculty),
                    escape(&p.accreditation),
                    path_segment(&p.name),
                )
            })
            .collect()
    };

    let body = format!(
        r#"<a href="/programStudy/add" class="button">Add study program</a>
        <table>
            <thead><tr><th>#</th><th>Program</th><th>Faculty</th><th>Accreditation</th><th></th></tr></thead>
            <tbody>{}</tbody>
        </table>"#,
        rows
    );
    layout("Program Study", flash, &body)
}

/// GET /programStudy/add, and POST /program-study on validation failure
pub fn add_form(form: &ProgramStudyForm, errors: &[FieldError]) -> Html<String> {
    let body = format!(
        r#"{errors}
        <form method="post" action="/program-study">
            {fields}
            <button type="submit" class="button">Add study program</button>
            <a href="/program-study" class="button">Back</a>
        </form>"#,
        errors = error_list(errors),
        fields = fields(form),
    );
    layout("Add Study Program", None, &body)
}

/// GET /program-study/edit/:key, and PUT /program-study/:id on validation failure
pub fn edit_form(form: &ProgramStudyForm, errors: &[FieldError]) -> Html<String> {
    let action = form
        .id
        .map(|id| format!("/program-study/{}?_method=PUT", id))
        .unwrap_or_else(|| "/program-study".to_string());

    let body = format!(
        r#"{errors}
        <form method="post" action="{action}">
            {fields}
            <button type="submit" class="button">Save changes</button>
            <a href="/program-study" class="button">Back</a>
        </form>"#,
        errors = error_list(errors),
        action = escape(&action),
        fields = fields(form),
    );
    layout("Edit Study Program", None, &body)
}

/// GET /program-study/:key
pub fn detail(program: &ProgramStudy) -> Html<String> {
    let key = path_segment(&program.name);
    let body = format!(
        r#"<table>
            <tr><th>Program name</th><td>{name}</td></tr>
            <tr><th>Faculty</th><td>{faculty}</td></tr>
            <tr><th>Accreditation</th><td>{accreditation}</td></tr>
        </table>
        <a href="/program-study/edit/{key}" class="button">Edit</a>
        {delete}
        <a href="/program-study" class="button">Back</a>"#,
        name = escape(&program.name),
        faculty = escape(&program.faculty),
        accreditation = escape(&program.accreditation),
        key = key,
        delete = delete_button(&format!("/program-study/{}", key), "", "study program"),
    );
    layout("Study Program Detail", None, &body)
}
