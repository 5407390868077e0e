//! Product inventory list with search and paging.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_router::components::A;

use crate::config::ClientConfig;
use crate::net::api::{ApiError, ProductQuery};
use crate::net::types::{Product, ProductPage};
use crate::state::products::{ProductListState, status_badge, status_label};
use crate::util::auth::authorized;

pub const LIST_FALLBACK_MESSAGE: &str = "Products could not be loaded.";

#[component]
pub fn ProductsPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let page_size = config.page_size;
    let list = RwSignal::new(ProductListState::default());

    // Paging bookkeeping must not refetch, so the fetch keys on the query only.
    let query = Memo::new(move |_| list.with(|l| l.query(page_size)));
    let products = LocalResource::new(move || {
        let config = config.clone();
        let query = query.get();
        async move { load_products(&config, &query).await }
    });

    Effect::new(move || {
        if let Some(Ok(page)) = products.get() {
            list.update(|l| l.total_pages = page.total_pages);
        }
    });

    view! {
        <div class="products-page">
            <header class="page-header">
                <div>
                    <h1>"Inventory Catalog"</h1>
                    <p>"Manage and track your supply chain inventory on-chain."</p>
                </div>
                <A href="/dashboard/products/new">"New Product"</A>
            </header>
            <input
                class="search-input"
                type="text"
                placeholder="Search by code, name or category..."
                prop:value=move || list.with(|l| l.search.clone())
                on:input=move |ev| {
                    let term = event_target_value(&ev);
                    list.update(|l| l.set_search(term));
                }
            />
            <table class="product-table">
                <thead>
                    <tr>
                        <th>"Product Info"</th>
                        <th>"Location"</th>
                        <th>"Status"</th>
                        <th>"Timeline"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Suspense fallback=|| view! { <tr><td colspan="5">"Crunching on-chain data..."</td></tr> }>
                        {move || products.get().map(render_rows)}
                    </Suspense>
                </tbody>
            </table>
            <footer class="pager">
                <p>{move || list.with(ProductListState::page_label)}</p>
                <button disabled=move || !list.with(ProductListState::can_go_prev) on:click=move |_| list.update(ProductListState::prev)>
                    "Previous"
                </button>
                <button disabled=move || !list.with(ProductListState::can_go_next) on:click=move |_| list.update(ProductListState::next)>
                    "Next"
                </button>
            </footer>
        </div>
    }
}

fn render_rows(result: Result<ProductPage, ApiError>) -> AnyView {
    match result {
        Err(e) => view! { <tr><td colspan="5" class="error">{e.user_message(LIST_FALLBACK_MESSAGE)}</td></tr> }.into_any(),
        Ok(page) if page.content.is_empty() => {
            view! { <tr><td colspan="5">"No products found matching your criteria."</td></tr> }.into_any()
        }
        Ok(page) => page.content.into_iter().map(product_row).collect_view().into_any(),
    }
}

fn product_row(product: Product) -> impl IntoView {
    let tracking = format!("/dashboard/products/{}/tracking", product.id);
    let location = product.current_location.unwrap_or_else(|| "Origin".to_owned());
    let manufactured = product.manufactured_at.map(|at| at.chars().take(10).collect::<String>()).unwrap_or_default();
    view! {
        <tr>
            <td>
                <p class="product-name">{product.name}</p>
                <p class="product-code">{product.product_code}</p>
            </td>
            <td>{location}</td>
            <td><span class=status_badge(&product.status)>{status_label(&product.status)}</span></td>
            <td>{manufactured}</td>
            <td><A href=tracking>"Detail"</A></td>
        </tr>
    }
}

async fn load_products(config: &ClientConfig, query: &ProductQuery) -> Result<ProductPage, ApiError> {
    let (api, token) = authorized(config)?;
    api.products(&token, query)
        .await
        .inspect_err(|e| log::warn!("product list failed: page={} error={e}", query.page))
}
