//! NixGelato browser front-end

use leptos::prelude::*;

mod browser;
mod landing;
mod order;
mod route;

use route::Route;

/// Page shell.
#[component]
fn App() -> impl IntoView {
    match Route::from_path(&browser::pathname()) {
        Route::Landing => view! { <landing::LandingPage /> }.into_any(),
        Route::Order => view! { <order::OrderPage /> }.into_any(),
    }
}

fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
