//! End-to-end checks of the submit path, from form values to rendered markup.

use lca_form::config::resolve_endpoint;
use lca_form::{
    FieldError, MemoryForm, PredictOutcome, SubmitError, prepare_submission, render_outcome,
};
use serde_json::json;

fn valid_form() -> MemoryForm {
    MemoryForm::new()
        .with("fullTimeSelect", " y ")
        .with("employerStateSelect", "ca")
        .with("worksiteStateSelect", "OTHER")
        .with("worksiteStateOther", "  tx ")
        .with("socSelect", "15-1252")
        .with("wageSelect", "OTHER")
        .with("wageOther", " 98500.75 ")
}

#[test]
fn address_field_initialisation() {
    assert_eq!(resolve_endpoint(Some("https://x"), Some("https://y")), "https://x");
    assert_eq!(resolve_endpoint(None, Some("https://y")), "https://y");
    assert_eq!(resolve_endpoint(None, None), "http://localhost:8000");
}

#[test]
fn empty_form_reports_five_errors_and_sends_nothing() {
    let form = MemoryForm::new();
    let err = prepare_submission("http://localhost:8000", &form).unwrap_err();

    let errors = match err {
        SubmitError::Invalid(errors) => errors,
        other => panic!("expected validation errors, got {other:?}"),
    };
    assert_eq!(errors.len(), 5);
    assert_eq!(
        errors.to_string(),
        "Full-time position is required. Employer state is required. \
         Worksite state is required. Occupation code (SOC) is required. \
         Estimated annual wage is required."
    );
    assert_eq!(
        form.invalid_ids(),
        [
            "employerStateSelect",
            "fullTimeSelect",
            "socSelect",
            "wageSelect",
            "worksiteStateSelect"
        ]
    );
}

#[test]
fn negative_wage_via_other_input_is_rejected() {
    let form = valid_form().with("wageOther", "-5");
    let err = prepare_submission("http://localhost:8000", &form).unwrap_err();

    let errors = match err {
        SubmitError::Invalid(errors) => errors,
        other => panic!("expected validation errors, got {other:?}"),
    };
    assert_eq!(
        errors.0,
        vec![FieldError::NotPositive {
            label: "Estimated annual wage"
        }]
    );
    assert!(form.is_invalid("wageOther"));
}

#[test]
fn valid_form_produces_one_predict_request() {
    let form = valid_form();
    let submission = prepare_submission(" https://api.example.com/ ", &form).unwrap();

    assert_eq!(submission.url, "https://api.example.com/predict");

    let body: serde_json::Value = serde_json::from_str(&submission.body_json().unwrap()).unwrap();
    assert_eq!(
        body,
        json!({
            "FULL_TIME_POSITION": "Y",
            "EMPLOYER_STATE": "CA",
            "WORKSITE_STATE": "TX",
            "SOC_CODE": "15-1252",
            "WAGE_RATE": 98500.75
        })
    );
    assert!(body["WAGE_RATE"].is_number());
    assert!(form.invalid_ids().is_empty());
}

#[test]
fn responses_render_as_cards() {
    let html = render_outcome(&PredictOutcome::from_response(
        json!({"label": "CERTIFIED", "proba_certified": 0.873}),
    ));
    assert!(html.contains(r#"class="result-card positive""#));
    assert!(html.contains("Likely approved"));
    assert!(html.contains("87.3%"));
    assert!(html.contains("<details"));

    let html = render_outcome(&PredictOutcome::from_response(json!({"label": "DENIED"})));
    assert!(html.contains(r#"class="result-card negative""#));
    assert!(html.contains("Probability not available."));
}

#[test]
fn failed_request_renders_its_message() {
    let failure = std::io::Error::other("TypeError: Failed to fetch");
    let outcome = PredictOutcome::from_failure(&failure);
    assert_eq!(outcome, PredictOutcome::Error(failure.to_string()));

    let html = render_outcome(&outcome);
    assert!(html.contains(r#"class="result-card warning""#));
    assert!(html.contains("<p>TypeError: Failed to fetch</p>"));
}
