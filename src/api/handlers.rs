//! HTTP request handlers for the payroll ledger API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{Local, NaiveDate};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{PayrollFigures, PayrollInputs, SalaryCycle, calculate_payroll};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, EmployeeDraft, NewPayrollEntry, normalize_month};

use super::request::{EmployeeRequest, PayrollRequest, ReportRequestBody};
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, RecordResponse, ReportResponse,
};
use super::state::AppState;

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/employees",
            get(list_employees_handler).post(register_employee_handler),
        )
        .route(
            "/employees/:id",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .route("/payroll/calculate", post(calculate_handler))
        .route("/payroll/record", post(record_handler))
        .route("/reports", post(report_handler))
        .with_state(state)
}

/// Maps a body extraction failure to a 400 response.
fn json_rejection(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

fn path_rejection(rejection: PathRejection) -> ApiErrorResponse {
    ApiErrorResponse::bad_request(ApiError::with_details(
        "VALIDATION_ERROR",
        "Invalid employee id",
        rejection.body_text(),
    ))
}

/// Logs a failed operation and converts the error for the response.
fn failed(correlation_id: Uuid, action: &'static str) -> impl FnOnce(PayrollError) -> ApiErrorResponse {
    move |err| {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "{} failed", action
        );
        err.into()
    }
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<Employee>>> {
    let correlation_id = Uuid::new_v4();
    let employees = state
        .db()
        .list_employees()
        .map_err(failed(correlation_id, "Employee listing"))?;
    Ok(Json(employees))
}

/// Handler for POST /employees.
async fn register_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing employee registration");

    let Json(request) = payload.map_err(|r| json_rejection(r, correlation_id))?;
    let employee = state
        .db()
        .register_employee(EmployeeDraft::from(request))
        .map_err(failed(correlation_id, "Employee registration"))?;

    Ok((StatusCode::CREATED, Json(employee)))
}

/// Handler for GET /employees/:id.
async fn get_employee_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Employee>> {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(path_rejection)?;

    let employee = state
        .db()
        .get_employee(id)
        .map_err(failed(correlation_id, "Employee search"))?;
    Ok(Json(employee))
}

/// Handler for PUT /employees/:id.
async fn update_employee_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> ApiResult<Json<Employee>> {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(path_rejection)?;
    let Json(request) = payload.map_err(|r| json_rejection(r, correlation_id))?;

    let employee = state
        .db()
        .update_employee(id, EmployeeDraft::from(request))
        .map_err(failed(correlation_id, "Employee update"))?;
    Ok(Json(employee))
}

/// Handler for DELETE /employees/:id.
///
/// The employee's ledger entries are kept.
async fn delete_employee_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(path_rejection)?;

    state
        .db()
        .delete_employee(id)
        .map_err(failed(correlation_id, "Employee deletion"))?;
    Ok(StatusCode::NO_CONTENT)
}

/// A calculation ready to be returned or recorded.
struct Calculated {
    salaried_month: NaiveDate,
    cycle: SalaryCycle,
    figures: PayrollFigures,
    exceeds_leave_limit: bool,
}

/// Looks up the employee and runs the calculator for one request.
fn calculate_for(state: &AppState, request: &PayrollRequest, correlation_id: Uuid) -> PayrollResult<Calculated> {
    let settings = state.config().settings();
    let today = Local::now().date_naive();

    let cycle = match request.cycle_days {
        Some(days) => SalaryCycle::new(days)?,
        None => settings.salary_cycle(today)?,
    };
    let salaried_month = normalize_month(
        request.salaried_month.unwrap_or(today),
        settings.month_anchor_day,
    )?;
    let employee = state.db().get_employee(request.employee_id)?;

    // The limit is yearly: already-recorded absences count towards it.
    let absent_this_year = state
        .db()
        .absent_days_in_year(employee.id, salaried_month)?
        .saturating_add(request.absent_days);
    let exceeds_leave_limit = absent_this_year > settings.leave_limit;
    if exceeds_leave_limit {
        warn!(
            correlation_id = %correlation_id,
            employee_id = employee.id,
            absent_days = request.absent_days,
            absent_this_year,
            leave_limit = settings.leave_limit,
            "Absent days exceed the leave limit"
        );
    }

    let inputs = PayrollInputs::for_employee(&employee, request.absent_days, request.overtime_hours);
    let start_time = Instant::now();
    let figures = calculate_payroll(&inputs, cycle);
    info!(
        correlation_id = %correlation_id,
        employee_id = employee.id,
        cycle_days = cycle.days(),
        gross_pay = %figures.gross_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    Ok(Calculated {
        salaried_month,
        cycle,
        figures,
        exceeds_leave_limit,
    })
}

/// Handler for POST /payroll/calculate.
///
/// Returns the figures without touching the ledger.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> ApiResult<Json<CalculationResponse>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let Json(request) = payload.map_err(|r| json_rejection(r, correlation_id))?;
    let calculated = calculate_for(&state, &request, correlation_id)
        .map_err(failed(correlation_id, "Calculation"))?;

    Ok(Json(CalculationResponse::new(
        request.employee_id,
        calculated.salaried_month,
        calculated.cycle.days(),
        calculated.figures,
        calculated.exceeds_leave_limit,
    )))
}

/// Handler for POST /payroll/record.
///
/// Calculates and appends the rounded figures to the ledger. Recording the
/// same employee and month twice appends a second entry.
async fn record_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing record request");

    let Json(request) = payload.map_err(|r| json_rejection(r, correlation_id))?;
    let calculated = calculate_for(&state, &request, correlation_id)
        .map_err(failed(correlation_id, "Calculation"))?;

    let figures = calculated.figures.rounded();
    let entry = state
        .db()
        .record_payroll(NewPayrollEntry {
            employee_id: request.employee_id,
            absent: request.absent_days,
            holidays: request.holidays,
            overtime_hours: request.overtime_hours,
            no_pay: figures.no_pay,
            base_pay: figures.base_pay,
            gross_pay: figures.gross_pay,
            salaried_month: calculated.salaried_month,
        })
        .map_err(failed(correlation_id, "Recording"))?;

    Ok((
        StatusCode::CREATED,
        Json(RecordResponse {
            entry,
            exceeds_leave_limit: calculated.exceeds_leave_limit,
        }),
    ))
}

/// Handler for POST /reports.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequestBody>, JsonRejection>,
) -> ApiResult<Json<ReportResponse>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let Json(body) = payload.map_err(|r| json_rejection(r, correlation_id))?;
    let request = body
        .into_request()
        .map_err(failed(correlation_id, "Report validation"))?;

    let outcome = state
        .reports()
        .generate(state.db(), &request)
        .map_err(failed(correlation_id, "Report generation"))?;

    Ok(Json(outcome.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigLoader, PayrollConfig};
    use crate::store::PayrollDb;
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let db = PayrollDb::open_in_memory().unwrap();
        db.initialize().unwrap();
        db.register_employee(EmployeeDraft {
            name: "John Doe".to_string(),
            monthly_salary: 5000,
            overtime_rate: 15,
            allowances: 1000,
        })
        .unwrap();
        let config = ConfigLoader::from_config(PayrollConfig::default()).unwrap();
        AppState::new(db, config)
    }

    fn json_request(method: &str, uri: &str, body: impl Into<String>) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.into()))
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_calculate_reference_figures() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request(
                "POST",
                "/payroll/calculate",
                r#"{"employee_id": 1, "absent_days": 2, "overtime_hours": 10,
                    "cycle_days": 30, "salaried_month": "2023-05-03"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let result: CalculationResponse = body_json(response).await;
        assert_eq!(result.no_pay, Decimal::from_str("333.33").unwrap());
        assert_eq!(result.base_pay, Decimal::from(6150));
        assert_eq!(result.gross_pay, Decimal::from_str("4279.17").unwrap());
        assert_eq!(result.salaried_month, NaiveDate::from_ymd_opt(2023, 5, 28).unwrap());
        assert!(!result.exceeds_leave_limit);
    }

    #[tokio::test]
    async fn test_calculate_does_not_record() {
        let state = create_test_state();
        let router = create_router(state.clone());

        router
            .oneshot(json_request(
                "POST",
                "/payroll/calculate",
                r#"{"employee_id": 1, "absent_days": 0, "overtime_hours": 0}"#,
            ))
            .await
            .unwrap();

        assert_eq!(state.db().count_entries().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_calculate_flags_leave_limit() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request(
                "POST",
                "/payroll/calculate",
                r#"{"employee_id": 1, "absent_days": 31, "overtime_hours": 0, "cycle_days": 31}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let result: CalculationResponse = body_json(response).await;
        assert!(result.exceeds_leave_limit);
    }

    #[tokio::test]
    async fn test_leave_limit_counts_absences_already_recorded_this_year() {
        let state = create_test_state();
        state
            .db()
            .record_payroll(NewPayrollEntry {
                employee_id: 1,
                absent: 20,
                holidays: 0,
                overtime_hours: 0,
                no_pay: Decimal::from_str("3333.33").unwrap(),
                base_pay: Decimal::from(6000),
                gross_pay: Decimal::from_str("2000.00").unwrap(),
                salaried_month: NaiveDate::from_ymd_opt(2023, 1, 28).unwrap(),
            })
            .unwrap();

        let calculate = |month: &str| {
            json_request(
                "POST",
                "/payroll/calculate",
                format!(
                    r#"{{"employee_id": 1, "absent_days": 15, "overtime_hours": 0,
                        "cycle_days": 28, "salaried_month": "{}"}}"#,
                    month
                ),
            )
        };

        let same_year = create_router(state.clone())
            .oneshot(calculate("2023-02-10"))
            .await
            .unwrap();
        let result: CalculationResponse = body_json(same_year).await;
        assert!(result.exceeds_leave_limit, "20 recorded + 15 requested is over 30");

        let next_year = create_router(state)
            .oneshot(calculate("2024-02-10"))
            .await
            .unwrap();
        let result: CalculationResponse = body_json(next_year).await;
        assert!(!result.exceeds_leave_limit);
    }

    #[tokio::test]
    async fn test_calculate_zero_cycle_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request(
                "POST",
                "/payroll/calculate",
                r#"{"employee_id": 1, "absent_days": 1, "overtime_hours": 0, "cycle_days": 0}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_calculate_unknown_employee_returns_404() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request(
                "POST",
                "/payroll/calculate",
                r#"{"employee_id": 77, "absent_days": 0, "overtime_hours": 0}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "EMPLOYEE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request("POST", "/payroll/record", "{invalid json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request(
                "POST",
                "/payroll/calculate",
                r#"{"employee_id": 1, "overtime_hours": 0}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("absent_days"));
    }

    #[tokio::test]
    async fn test_non_numeric_employee_id_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/employees/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_register_blank_name_returns_400() {
        let state = create_test_state();
        let router = create_router(state.clone());

        let response = router
            .oneshot(json_request(
                "POST",
                "/employees",
                r#"{"name": "  ", "monthly_salary": 1, "overtime_rate": 1, "allowances": 1}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.db().count_employees().unwrap(), 1);
    }
}
