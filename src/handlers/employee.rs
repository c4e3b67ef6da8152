// src/handlers/employee.rs
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};
use crate::auth::antiforgery::{issue_token, new_nonce, nonce_cookie, AntiforgeryCookie};
use crate::database::Employees;
use crate::dtos::employee::{EmployeeForm, FieldError};
use crate::dtos::view::{FormView, View};
use crate::error::AppError;
use crate::models::employee::Employee;
use crate::state::AppState;

pub const INDEX_PATH: &str = "/Employee/Index";

fn redirect_to_index() -> Response {
    Redirect::to(INDEX_PATH).into_response()
}

fn not_found() -> AppError {
    AppError::not_found("Employee not found")
}

// Ids that fail to parse bind as "no id", same as a missing segment.
fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

// Tokens are bound to the client's nonce cookie; a client without one gets a
// new nonce along with the view.
fn form_view<M: Serialize>(
    state: &AppState,
    cookie: AntiforgeryCookie,
    view: &'static str,
    model: M,
    errors: Vec<FieldError>,
) -> Result<FormView<M>, AppError> {
    let (nonce, set_cookie) = match cookie.0 {
        Some(nonce) => (nonce, None),
        None => {
            let nonce = new_nonce();
            let set_cookie = nonce_cookie(&nonce);
            (nonce, set_cookie)
        }
    };

    Ok(FormView {
        view,
        model,
        antiforgery_token: issue_token(&state.antiforgery_secret, &nonce)?,
        errors,
        set_cookie,
    })
}

fn unreadable_body(rejection: JsonRejection) -> Vec<FieldError> {
    vec![FieldError { field: "body", message: rejection.body_text() }]
}

// GET /Employee/Index - List all employees
#[instrument(skip(employees))]
pub async fn index(mut employees: Employees) -> Result<View<Vec<Employee>>, AppError> {
    let rows = employees.to_list().await?;
    Ok(View::new("Employee/Index", rows))
}

// GET /Employee/Create - Blank form
#[instrument(skip(state, cookie))]
pub async fn create_form(
    State(state): State<AppState>,
    cookie: AntiforgeryCookie,
) -> Result<FormView<Option<EmployeeForm>>, AppError> {
    form_view(&state, cookie, "Employee/Create", None, Vec::new())
}

// POST /Employee/Create - Insert and go back to the list
#[instrument(skip(state, cookie, employees, payload))]
pub async fn create(
    State(state): State<AppState>,
    cookie: AntiforgeryCookie,
    mut employees: Employees,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, AppError> {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            let errors = unreadable_body(rejection);
            return Ok(form_view(&state, cookie, "Employee/Create", Value::Null, errors)?.into_response());
        }
    };

    let (form, mut errors) = EmployeeForm::bind(&payload);
    errors.merge(form.validate());
    if !errors.is_empty() {
        return Ok(form_view(&state, cookie, "Employee/Create", payload, errors.into_inner())?.into_response());
    }

    let employee = employees.add(form.into_new()).await?;
    info!(id = employee.id, "Employee created");

    Ok(redirect_to_index())
}

// GET /Employee/Edit and /Employee/Delete without an id
pub async fn missing_id() -> AppError {
    not_found()
}

// GET /Employee/Edit/{id} - Form filled with the current row
#[instrument(skip(state, cookie, employees))]
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
    cookie: AntiforgeryCookie,
    mut employees: Employees,
) -> Result<FormView<Option<EmployeeForm>>, AppError> {
    let id = parse_id(&id).ok_or_else(not_found)?;
    let employee = employees.find(id).await?.ok_or_else(not_found)?;

    form_view(&state, cookie, "Employee/Edit", Some(EmployeeForm::from(employee)), Vec::new())
}

// POST /Employee/Edit/{id} - Overwrite the row
#[instrument(skip(state, cookie, employees, payload))]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    cookie: AntiforgeryCookie,
    mut employees: Employees,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, AppError> {
    // An unreadable body carries no id, so it can never match the route.
    let Ok(Json(payload)) = payload else {
        return Err(not_found());
    };

    let (form, mut errors) = EmployeeForm::bind(&payload);
    if parse_id(&id) != Some(form.id) {
        return Err(not_found());
    }

    errors.merge(form.validate());
    if !errors.is_empty() {
        return Ok(form_view(&state, cookie, "Employee/Edit", payload, errors.into_inner())?.into_response());
    }

    let employee = employees
        .update(form.into_employee())
        .await?
        .ok_or_else(not_found)?;
    info!(id = employee.id, "Employee updated");

    Ok(redirect_to_index())
}

// GET /Employee/Delete/{id} - Confirmation page
#[instrument(skip(state, cookie, employees))]
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
    cookie: AntiforgeryCookie,
    mut employees: Employees,
) -> Result<FormView<Employee>, AppError> {
    let id = parse_id(&id).ok_or_else(not_found)?;
    let employee = employees.find(id).await?.ok_or_else(not_found)?;

    form_view(&state, cookie, "Employee/Delete", employee, Vec::new())
}

// POST /Employee/Delete/{id} - Remove if present; absent rows are not an error
#[instrument(skip(employees))]
pub async fn delete_confirmed(
    Path(id): Path<String>,
    mut employees: Employees,
) -> Result<Response, AppError> {
    if let Some(id) = parse_id(&id) {
        if let Some(employee) = employees.find(id).await? {
            if employees.remove(employee.id).await? {
                info!(id, "Employee deleted");
            }
        }
    }

    Ok(redirect_to_index())
}
