//! HTTP handlers. Inbound adapter over CourseReportPort.

use crate::domain::DomainError;
use crate::ports::CourseReportPort;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::{error, info, warn};

#[derive(Debug, Deserialize)]
pub struct CourseQuery {
    #[serde(rename = "courseNumber")]
    pub course_number: Option<String>,
}

/// GET /courses?courseNumber=KIEI-451
pub async fn get_course_report(
    service: web::Data<dyn CourseReportPort>,
    query: web::Query<CourseQuery>,
) -> Result<HttpResponse, DomainError> {
    let course_number = query.into_inner().course_number.unwrap_or_default();

    match service.get_course_report(&course_number).await {
        Ok(report) => {
            info!(
                course_number = %report.course_number,
                total_reviews = report.course_total_reviews,
                "course report served"
            );
            Ok(HttpResponse::Ok().json(report))
        }
        Err(e) if e.is_client_error() => {
            warn!(course_number = %course_number, error = %e, "course report rejected");
            Err(e)
        }
        Err(e) => {
            error!(course_number = %course_number, error = %e, "course report failed");
            Err(e)
        }
    }
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Register routes. `/.netlify/functions/courses` is kept for existing clients.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/courses", web::get().to(get_course_report))
        .route("/.netlify/functions/courses", web::get().to(get_course_report));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::persistence::InMemoryCatalog;
    use crate::usecases::CourseReportService;
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};
    use std::sync::Arc;

    const SEED: &str = r#"{
        "courses": [
            {"id": "c451", "courseNumber": "KIEI-451", "name": "Intro to Software Development"},
            {"id": "c925", "courseNumber": "KIEI-925", "name": "Building Scalable Startups"},
            {"id": "c404", "courseNumber": "GHOST-1", "name": "Dangling lecturer"}
        ],
        "lecturers": [
            {"id": "brian", "name": "Brian Eng"},
            {"id": "ben", "name": "Ben Block"}
        ],
        "sections": [
            {"id": "a", "courseId": "c451", "lecturerId": "brian"},
            {"id": "b", "courseId": "c451", "lecturerId": "ben"},
            {"id": "e", "courseId": "c925", "lecturerId": "brian"},
            {"id": "g", "courseId": "c404", "lecturerId": "nobody"}
        ],
        "reviews": [
            {"id": "r1", "sectionId": "a", "body": "Great intro", "rating": 4},
            {"id": "r2", "sectionId": "a", "body": "Loved the labs", "rating": 5},
            {"id": "r3", "sectionId": "b", "body": "Solid", "rating": 3}
        ]
    }"#;

    fn report_data() -> web::Data<dyn CourseReportPort> {
        let catalog = Arc::new(InMemoryCatalog::from_seed_json(SEED).unwrap());
        let service: Arc<dyn CourseReportPort> = Arc::new(CourseReportService::new(catalog));
        web::Data::from(service)
    }

    #[actix_web::test]
    async fn serves_course_report() {
        let app = test::init_service(App::new().app_data(report_data()).configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/courses?courseNumber=KIEI-451")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            json!({
                "courseNumber": "KIEI-451",
                "name": "Intro to Software Development",
                "courseTotalReviews": 3,
                "averageRating": 4.0,
                "sections": [
                    {
                        "lecturerName": "Brian Eng",
                        "ratingNumberPerSection": 2,
                        "averageRating": 4.5,
                        "review": [
                            {"comment": "Great intro", "rating": 4},
                            {"comment": "Loved the labs", "rating": 5}
                        ]
                    },
                    {
                        "lecturerName": "Ben Block",
                        "ratingNumberPerSection": 1,
                        "averageRating": 3.0,
                        "review": [{"comment": "Solid", "rating": 3}]
                    }
                ]
            })
        );
    }

    #[actix_web::test]
    async fn legacy_path_and_null_averages() {
        let app = test::init_service(App::new().app_data(report_data()).configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/.netlify/functions/courses?courseNumber=KIEI-925")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["courseTotalReviews"], 0);
        assert!(body["averageRating"].is_null());
        assert!(body["sections"][0]["averageRating"].is_null());
    }

    #[actix_web::test]
    async fn missing_course_number_is_bad_request() {
        let app = test::init_service(App::new().app_data(report_data()).configure(configure)).await;

        for uri in ["/courses", "/courses?courseNumber="] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["code"], 400);
        }
    }

    #[actix_web::test]
    async fn unknown_course_is_not_found() {
        let app = test::init_service(App::new().app_data(report_data()).configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/courses?courseNumber=NOPE-000")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Course not found: NOPE-000");
    }

    #[actix_web::test]
    async fn dependency_failure_is_server_error() {
        let app = test::init_service(App::new().app_data(report_data()).configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/courses?courseNumber=GHOST-1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({"error": "Lecturer not found: nobody", "code": 500})
        );
    }

    #[actix_web::test]
    async fn health_is_ok() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"status": "ok"}));
    }
}
