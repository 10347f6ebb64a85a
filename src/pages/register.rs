//! Account registration page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::{Services, spawn};
use crate::net::backend::ChatBackend;
use crate::state::auth::{AuthState, SignUpForm};
use crate::util::auth::install_signed_in_redirect;

type Getter = fn(&SignUpForm) -> &str;
type Setter = fn(&mut SignUpForm, String);

const GENDERS: &[(&str, &str)] = &[("male", "Male"), ("female", "Female"), ("other", "Other")];

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let services = Services::from_context();
    let navigate = use_navigate();

    install_signed_in_redirect(auth, navigate.clone());

    let fields = RwSignal::new(SignUpForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match fields.with_untracked(SignUpForm::validate) {
            Ok(request) => request,
            Err(invalid) => {
                info.set(invalid.to_string());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account…".to_owned());

        let backend = services.backend();
        let navigate = navigate.clone();
        spawn(async move {
            match backend.sign_up(&request).await {
                Ok(()) => {
                    log::info!("register: account created for {}", request.email);
                    navigate("/login", leptos_router::NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("register: sign up failed ({}): {e}", e.error_code());
                    info.set(format!("Registration failed: {e}"));
                }
            }
            busy.set(false);
        });
    };

    let text_input = move |kind: &'static str, placeholder: &'static str, get: Getter, set: Setter| {
        view! {
            <input
                class="login-input"
                type=kind
                placeholder=placeholder
                prop:value=move || fields.with(|f| get(f).to_owned())
                on:input=move |ev| fields.update(|f| set(f, event_target_value(&ev)))
            />
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create account"</h1>
                <form class="login-form" on:submit=on_submit>
                    {text_input("text", "Username", |f| &f.username, |f, v| f.username = v)}
                    {text_input("email", "you@example.com", |f| &f.email, |f, v| f.email = v)}
                    {text_input("password", "Password", |f| &f.password, |f, v| f.password = v)}
                    {text_input(
                        "password",
                        "Confirm password",
                        |f| &f.confirm_password,
                        |f, v| f.confirm_password = v,
                    )}
                    <fieldset class="login-form__gender">
                        {GENDERS
                            .iter()
                            .map(|&(value, label)| {
                                view! {
                                    <label>
                                        <input
                                            type="radio"
                                            name="gender"
                                            value=value
                                            prop:checked=move || fields.with(|f| f.gender == value)
                                            on:change=move |_| fields.update(|f| value.clone_into(&mut f.gender))
                                        />
                                        {label}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </fieldset>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? " <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
