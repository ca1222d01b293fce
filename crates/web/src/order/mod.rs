//! Cashier order screen.
//!
//! The whole screen state lives in one [`Register`] signal; every control
//! reads from it and every action is a single update of it.

use leptos::{logging, prelude::*, task};
use nixgelato::{
    catalog::{ProductId, ToppingId},
    money::format_money,
    register::{Phase, Register},
};
use nixgelato_client::{
    ApiClient, ApiError, SaleError, confirmation, load_catalog, submit_invoice,
};

use crate::browser::{self, LOGIN_PATH};

mod cart;
mod catalog;
mod customize;
mod payment;

use cart::CartPanel;
use catalog::CatalogMenu;
use customize::ProductCustomizer;

const LOAD_FAILED: &str = "Error cargando los datos del sistema";

/// Shown for products and cart lines without a picture.
pub(crate) const PLACEHOLDER_IMAGE: &str = "/placeholder-image.jpg";

fn start_loading(client: ApiClient, register: RwSignal<Register>) {
    task::spawn_local(async move {
        match load_catalog(&client).await {
            Ok(catalog) => register.update(|register| register.finish_loading(catalog)),
            Err(error) => fail_loading(register, &error),
        }
    });
}

fn fail_loading(register: RwSignal<Register>, error: &ApiError) {
    logging::error!("catalog load failed: {error}");

    register.update(Register::fail_loading);

    browser::alert(LOAD_FAILED);
}

fn select_product(register: RwSignal<Register>, id: ProductId) {
    let outcome = register.try_update(|register| register.select_product(id).map(|_| ()));

    if let Some(Err(error)) = outcome {
        browser::alert(&error.to_string());
    }
}

fn toggle_topping(register: RwSignal<Register>, id: ToppingId) {
    let outcome = register.try_update(|register| register.toggle_topping(id).map(|_| ()));

    if let Some(Err(error)) = outcome {
        browser::alert(&error.to_string());
    }
}

fn add_to_cart(register: RwSignal<Register>) {
    let now = browser::now();
    let outcome = register.try_update(|register| register.add_to_cart(now).map(|_| ()));

    if let Some(Err(error)) = outcome {
        browser::alert(&error.to_string());
    }
}

fn submit_order(register: RwSignal<Register>, submitting: RwSignal<bool>) {
    let invoice = match register.with_untracked(Register::prepare_invoice) {
        Ok(invoice) => invoice,
        Err(error) => {
            browser::alert(&error.to_string());
            return;
        }
    };

    let client = match browser::connect() {
        Ok(client) => client,
        Err(ApiError::MissingToken) => {
            browser::redirect(LOGIN_PATH);
            return;
        }
        Err(error) => {
            browser::alert(&SaleError::from(error).to_string());
            return;
        }
    };

    submitting.set(true);

    task::spawn_local(async move {
        match submit_invoice(&client, &invoice).await {
            Ok(receipt) => {
                register.update(Register::complete_sale);
                browser::alert(&confirmation(&receipt));
            }
            Err(error) => browser::alert(&SaleError::from(error).to_string()),
        }

        submitting.set(false);
    });
}

#[component]
fn OrderNav(register: RwSignal<Register>) -> impl IntoView {
    view! {
        <nav class="navbar">
            <a class="navbar-brand" href="/">"🍨 NixGelato - Sistema de Caja"</a>
            <div class="navbar-actions">
                <span class="badge badge-items">
                    {move || format!("{} items", register.with(Register::item_count))}
                </span>
                <span class="badge badge-total">
                    {move || register.with(|register| format_money(&register.totals().total))}
                </span>
                <button
                    type="button"
                    class="btn btn-outline"
                    on:click=move |_| browser::navigate(LOGIN_PATH)
                >
                    "Cerrar Sesión"
                </button>
            </div>
        </nav>
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <main class="loading-screen">
            <div class="spinner" role="status">
                <span class="sr-only">"Cargando..."</span>
            </div>
            <p>"Cargando sistema de caja..."</p>
        </main>
    }
}

#[component]
fn MenuHeader(register: RwSignal<Register>) -> impl IntoView {
    let heading = move || {
        register.with(|register| match register.selection() {
            Some(selection) => (
                "Personalizar Producto",
                format!("Estás personalizando: {}", selection.product().name),
            ),
            None => (
                "Menú de Productos",
                "Selecciona un producto para comenzar tu pedido".to_string(),
            ),
        })
    };

    view! {
        <header class="menu-header">
            <div>
                <h4>{move || heading().0}</h4>
                <p class="text-muted">{move || heading().1}</p>
            </div>
            <div class="menu-counters">
                <div>
                    <div class="counter-value">{move || register.with(Register::item_count)}</div>
                    <small>"Items"</small>
                </div>
                <div>
                    <div class="counter-value">
                        {move || register.with(|register| format_money(&register.totals().total))}
                    </div>
                    <small>"Total"</small>
                </div>
            </div>
        </header>
    }
}

/// Order screen. Sends the cashier to the login screen when there is no
/// session.
#[component]
pub fn OrderPage() -> impl IntoView {
    let register = RwSignal::new(Register::loading());
    let submitting = RwSignal::new(false);

    match browser::connect() {
        Ok(client) => start_loading(client, register),
        Err(ApiError::MissingToken) => {
            browser::redirect(LOGIN_PATH);
            return ().into_any();
        }
        Err(error) => fail_loading(register, &error),
    }

    let phase = Memo::new(move |_| register.with(Register::phase));

    view! {
        <OrderNav register />
        {move || {
            if phase.get() == Phase::Loading {
                return view! { <LoadingScreen /> }.into_any();
            }

            view! {
                <main class="order-layout">
                    <section class="menu-panel">
                        <MenuHeader register />
                        {move || {
                            if phase.get() == Phase::Customizing {
                                view! { <ProductCustomizer register /> }.into_any()
                            } else {
                                view! { <CatalogMenu register /> }.into_any()
                            }
                        }}
                    </section>
                    <CartPanel register submitting />
                </main>
            }
            .into_any()
        }}
    }
    .into_any()
}
