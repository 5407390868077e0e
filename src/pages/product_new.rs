//! New-product form.
//!
//! Validates locally, posts the product, and returns to the inventory list
//! on success. Server and network failures are shown above the actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use time::OffsetDateTime;

use crate::components::field_error::FieldError;
use crate::config::ClientConfig;
use crate::state::product_form::{CATEGORIES, ProductDraft};
use crate::util::validate::FieldErrors;

pub const PRODUCTS_ROUTE: &str = "/dashboard/products";

#[component]
pub fn ProductNewPage() -> impl IntoView {
    let config = StoredValue::new(expect_context::<ClientConfig>());
    let navigate = use_navigate();

    let draft = RwSignal::new(ProductDraft::new(OffsetDateTime::now_utc()));
    let errors = RwSignal::new(FieldErrors::default());
    let submit_error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        let body = match draft.with(ProductDraft::to_request) {
            Ok(body) => body,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(FieldErrors::default());
        submit_error.set(None);
        loading.set(true);

        #[cfg(feature = "csr")]
        {
            let config = config.get_value();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = match crate::util::auth::authorized(&config) {
                    Ok((api, token)) => api.create_product(&token, &body).await,
                    Err(e) => Err(e),
                };
                loading.set(false);
                match result {
                    Ok(()) => {
                        log::info!("product submitted: code={}", body.product_code);
                        navigate(PRODUCTS_ROUTE, NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("product creation failed: {e}");
                        submit_error.set(Some(crate::state::product_form::create_error_message(&e)));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (config, &navigate, body);
            loading.set(false);
        }
    };

    let back = use_navigate();

    view! {
        <div class="product-new-page">
            <header class="page-header">
                <button class="icon-button" on:click=move |_| back(PRODUCTS_ROUTE, NavigateOptions::default())>
                    "\u{2190}"
                </button>
                <div>
                    <h1>"Add New Product"</h1>
                    <p>"Initiate a new traceable item on the blockchain."</p>
                </div>
            </header>
            <form class="product-form" on:submit=on_submit>
                {draft_input(draft, errors, "productCode", "Product Code / SKU", "text", |d| &d.product_code, |d| &mut d.product_code)}
                {draft_input(draft, errors, "name", "Product Name", "text", |d| &d.name, |d| &mut d.name)}
                <label class="form-field">
                    <span>"Category"</span>
                    <select
                        prop:value=move || draft.with(|d| d.category.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.category = value);
                            errors.update(|e| e.clear("category"));
                        }
                    >
                        <option value="">"Select Category"</option>
                        {CATEGORIES
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                    <FieldError message=Signal::derive(move || errors.with(|e| e.get("category").map(str::to_owned))) />
                </label>
                {draft_input(draft, errors, "batchNumber", "Batch Number", "text", |d| &d.batch_number, |d| &mut d.batch_number)}
                {draft_input(draft, errors, "weightGrams", "Weight (grams)", "number", |d| &d.weight_grams, |d| &mut d.weight_grams)}
                {draft_input(draft, errors, "manufacturedAt", "Manufactured At", "datetime-local", |d| &d.manufactured_at, |d| &mut d.manufactured_at)}
                {draft_input(draft, errors, "initialLocation", "Initial Location", "text", |d| &d.initial_location, |d| &mut d.initial_location)}
                <label class="form-field">
                    <span>"Description"</span>
                    <textarea
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.description = value);
                        }
                    ></textarea>
                </label>
                <FieldError message=submit_error />
                <button type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Submitting..." } else { "Create Product" }}
                </button>
            </form>
        </div>
    }
}

fn draft_input(
    draft: RwSignal<ProductDraft>,
    errors: RwSignal<FieldErrors>,
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    read: fn(&ProductDraft) -> &String,
    write: fn(&mut ProductDraft) -> &mut String,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span>{label}</span>
            <input
                name=name
                type=input_type
                prop:value=move || draft.with(|d| read(d).clone())
                on:input=move |ev| {
                    let next = event_target_value(&ev);
                    draft.update(|d| *write(d) = next);
                    errors.update(|e| e.clear(name));
                }
            />
            <FieldError message=Signal::derive(move || errors.with(|e| e.get(name).map(str::to_owned))) />
        </label>
    }
}
