use super::*;

fn response() -> SignInResponse {
    SignInResponse {
        user: User { id: "u1".into(), username: "ann".into(), email: "a@x.io".into(), gender: None },
        access_token: "at".into(),
        refresh_token: "rt".into(),
    }
}

#[test]
fn default_is_signed_out() {
    assert!(!AuthState::default().is_signed_in());
}

#[test]
fn storage_is_empty_natively() {
    assert_eq!(AuthState::from_storage(), AuthState::default());
}

#[test]
fn sign_in_then_out() {
    let mut auth = AuthState::default();
    auth.sign_in(response());
    assert!(auth.is_signed_in());
    assert_eq!(auth.access_token.as_deref(), Some("at"));
    assert_eq!(auth.refresh_token.as_deref(), Some("rt"));

    auth.sign_out();
    assert_eq!(auth, AuthState::default());
}

#[test]
fn user_without_token_is_not_signed_in() {
    let auth = AuthState { user: Some(User::default()), access_token: Some(String::new()), refresh_token: None };
    assert!(!auth.is_signed_in());
}

#[test]
fn sign_in_form_requires_fields() {
    let form = SignInForm { email: " ".into(), password: "pw".into() };
    assert_eq!(form.validate(), Err(FormInvalid::Missing("email")));

    let form = SignInForm { email: "a@x.io".into(), password: String::new() };
    assert_eq!(form.validate(), Err(FormInvalid::Missing("password")));

    let form = SignInForm { email: "nope".into(), password: "pw".into() };
    assert_eq!(form.validate(), Err(FormInvalid::BadEmail));

    let ok = SignInForm { email: " a@x.io ".into(), password: "pw".into() }.validate().unwrap();
    assert_eq!(ok.email, "a@x.io");
}

#[test]
fn sign_up_form_checks_every_field_and_passwords() {
    let filled = SignUpForm {
        username: "ann".into(),
        email: "a@x.io".into(),
        password: "secret".into(),
        confirm_password: "secret".into(),
        gender: "female".into(),
    };
    let req = filled.validate().unwrap();
    assert_eq!(req.confirm_password, "secret");
    assert_eq!(req.gender, "female");

    let missing = SignUpForm { username: String::new(), ..filled.clone() };
    assert_eq!(missing.validate(), Err(FormInvalid::Missing("username")));

    let mismatch = SignUpForm { confirm_password: "other".into(), ..filled.clone() };
    assert_eq!(mismatch.validate(), Err(FormInvalid::PasswordMismatch));
    assert_eq!(FormInvalid::PasswordMismatch.to_string(), "Passwords do not match.");
}

#[test]
fn sign_up_default_gender_is_set() {
    assert_eq!(SignUpForm::default().gender, "male");
    assert_eq!(SignUpForm::default().validate(), Err(FormInvalid::Missing("username")));
}
