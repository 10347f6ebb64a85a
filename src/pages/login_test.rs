use super::*;

#[test]
fn sign_in_failure_hides_details_for_rejected_credentials() {
    let error = ApiError::Validation { status: 401, message: "jwt malformed".to_owned() };
    assert_eq!(sign_in_failure(&error), "Invalid email or password.");
}

#[test]
fn sign_in_failure_reports_other_errors() {
    let error = ApiError::Network("connection refused".to_owned());
    assert_eq!(sign_in_failure(&error), "Sign in failed: network error: connection refused");
}
