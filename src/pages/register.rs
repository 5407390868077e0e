//! Registration page: role selection followed by the two-step wizard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. On success the browser does a full load of
//! `/login?registered=true` so the login page can show its one-shot notice.

use leptos::prelude::*;

use crate::components::field_error::FieldError;
use crate::config::ClientConfig;
use crate::state::registration::{
    REGISTRATION_FALLBACK_MESSAGE, ROLE_PROFILES, RegistrationField, RegistrationForm, RegistrationStep, role_profile,
};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = StoredValue::new(expect_context::<ClientConfig>());
    let form = RwSignal::new(None::<RegistrationForm>);
    let submitting = RwSignal::new(false);
    let submit_error = RwSignal::new(None::<String>);

    let step = move || form.with(|f| f.as_ref().map(|f| f.step));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        if step() == Some(RegistrationStep::Details) {
            form.update(|f| {
                if let Some(f) = f {
                    f.advance();
                }
            });
            return;
        }
        let Some(body) = form.try_update(|f| f.as_mut().and_then(RegistrationForm::prepare_submit)).flatten() else {
            return;
        };
        submitting.set(true);
        submit_error.set(None);

        #[cfg(feature = "csr")]
        {
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::api::HttpApi::new(&config).register(&body).await {
                    Ok(()) => {
                        log::info!("registration succeeded: role={}", body.role);
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&format!("{}?registered=true", config.login_route));
                        }
                    }
                    Err(e) => {
                        log::warn!("registration rejected: {e}");
                        submit_error.set(Some(e.user_message(REGISTRATION_FALLBACK_MESSAGE)));
                        submitting.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (config, body);
            submit_error.set(Some(REGISTRATION_FALLBACK_MESSAGE.to_owned()));
            submitting.set(false);
        }
    };

    let header = move || {
        form.with(|f| f.as_ref().and_then(|f| role_profile(&f.role)))
            .map(|p| view! {
                <h2>{p.title}</h2>
                <p>{p.description}</p>
            })
    };

    view! {
        <div class="register-page">
            <Show
                when=move || form.with(Option::is_some)
                fallback=move || view! { <RoleSelection form=form /> }
            >
                <div class="register-card">
                    <button class="link-button" on:click=move |_| form.set(None)>
                        "\u{2190} Back to role selection"
                    </button>
                    {header}
                    <form class="register-form" on:submit=on_submit>
                        <Show
                            when=move || step() == Some(RegistrationStep::Details)
                            fallback=move || view! {
                                {text_field(form, RegistrationField::Company, "Company", "text")}
                                {text_field(form, RegistrationField::JobTitle, "Job Title", "text")}
                                {text_field(form, RegistrationField::Department, "Department", "text")}
                                {text_field(form, RegistrationField::Address, "Business Address", "text")}
                                {text_field(form, RegistrationField::WalletAddress, "Wallet Address", "text")}
                                <div class="register-actions">
                                    <button
                                        type="button"
                                        on:click=move |_| form.update(|f| {
                                            if let Some(f) = f {
                                                f.back();
                                            }
                                        })
                                    >
                                        "Previous"
                                    </button>
                                    <button type="submit" disabled=move || submitting.get()>
                                        {move || if submitting.get() { "Creating account..." } else { "Create Account" }}
                                    </button>
                                </div>
                            }
                        >
                            {text_field(form, RegistrationField::FirstName, "First Name", "text")}
                            {text_field(form, RegistrationField::LastName, "Last Name", "text")}
                            {text_field(form, RegistrationField::Email, "Email Address", "email")}
                            {text_field(form, RegistrationField::PhoneNumber, "Phone Number", "tel")}
                            {text_field(form, RegistrationField::Password, "Password", "password")}
                            {text_field(form, RegistrationField::ConfirmPassword, "Confirm Password", "password")}
                            <div class="register-actions">
                                <button type="submit">"Next Step"</button>
                            </div>
                        </Show>
                        <FieldError message=submit_error />
                    </form>
                </div>
            </Show>
            <p class="register-footer">
                "Already have an account? "
                <a href="/login">"Sign in here"</a>
            </p>
        </div>
    }
}

#[component]
fn RoleSelection(form: RwSignal<Option<RegistrationForm>>) -> impl IntoView {
    view! {
        <div class="role-grid">
            {ROLE_PROFILES
                .iter()
                .map(|profile| {
                    let role = profile.role.clone();
                    let pick = move |_| form.set(Some(RegistrationForm::new(role.clone(), browser_timezone())));
                    view! {
                        <div class="role-card" on:click=pick>
                            <h3>{profile.title}</h3>
                            <p>{profile.description}</p>
                            <ul>
                                {profile.features.iter().take(3).map(|f| view! { <li>{*f}</li> }).collect_view()}
                            </ul>
                            <button class="role-card__cta">{format!("Register as {}", profile.role)}</button>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn text_field(
    form: RwSignal<Option<RegistrationForm>>,
    field: RegistrationField,
    label: &'static str,
    input_type: &'static str,
) -> impl IntoView {
    let value = move || form.with(|f| f.as_ref().map(|f| f.value(field).to_owned()).unwrap_or_default());
    let error = Signal::derive(move || form.with(|f| f.as_ref().and_then(|f| f.error(field)).map(str::to_owned)));
    view! {
        <label class="form-field">
            <span>{label}</span>
            <input
                name=field.name()
                type=input_type
                prop:value=value
                on:input=move |ev| {
                    let next = event_target_value(&ev);
                    form.update(|f| {
                        if let Some(f) = f {
                            f.set(field, next);
                        }
                    });
                }
            />
            <FieldError message=error />
        </label>
    }
}

/// IANA zone reported by the browser, e.g. `Europe/Berlin`.
fn browser_timezone() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let options = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new()).resolved_options();
        js_sys::Reflect::get(&options, &wasm_bindgen::JsValue::from_str("timeZone"))
            .ok()
            .and_then(|zone| zone.as_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
