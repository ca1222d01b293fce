use leptos::prelude::*;
use nixgelato::{
    catalog::{Category, Product, StockLevel},
    money::format_money,
    register::Register,
};

use super::{PLACEHOLDER_IMAGE, select_product};

/// Badge classes for a stock level.
pub(super) fn stock_badge_class(level: StockLevel) -> &'static str {
    match level {
        StockLevel::Plenty => "stock-badge badge bg-success",
        StockLevel::Low => "stock-badge badge bg-warning",
        StockLevel::Out => "stock-badge badge bg-danger",
    }
}

#[component]
fn ProductCard(product: Product, register: RwSignal<Register>) -> impl IntoView {
    let id = product.id;
    let in_stock = product.in_stock();

    let card_class = if in_stock {
        "product-card hover-lift cursor-pointer"
    } else {
        "product-card opacity-50"
    };

    let image = product
        .image
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    view! {
        <div class=card_class on:click=move |_| select_product(register, id)>
            <div class="product-image-wrapper">
                <img class="product-image" src=image alt=product.name.clone() />
                <div class="product-availability">
                    {if in_stock {
                        view! { <span class="badge bg-success">"Disponible"</span> }.into_any()
                    } else {
                        view! { <span class="badge bg-danger">"Sin Stock"</span> }.into_any()
                    }}
                </div>
                {product
                    .allows_toppings
                    .then(|| view! { <span class="badge bg-info product-toppings-flag">"+ Toppings"</span> })}
            </div>
            <div class="product-body">
                <h6 class="product-title">{product.name.clone()}</h6>
                <div class="product-meta">
                    <span class="product-price">{format_money(&product.price)}</span>
                    <span class=stock_badge_class(product.stock_level())>
                        {format!("Stock: {}", product.stock)}
                    </span>
                </div>
                {product
                    .allows_toppings
                    .then(|| view! { <span class="product-customizable">"🎯 Personalizable"</span> })}
            </div>
        </div>
    }
}

#[component]
fn CategorySection(category: Category, register: RwSignal<Register>) -> impl IntoView {
    let count = category.products.len();

    view! {
        <section class="catalog-category">
            <div class="catalog-category-header">
                <div>
                    <h5>{category.name}</h5>
                    <span class="text-muted">{format!("{count} productos disponibles")}</span>
                </div>
                <span class="badge bg-light">{count}</span>
            </div>
            <div class="product-grid">
                {category
                    .products
                    .into_iter()
                    .map(|product| view! { <ProductCard product register /> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Product grid grouped by category.
#[component]
pub(super) fn CatalogMenu(register: RwSignal<Register>) -> impl IntoView {
    let categories = Memo::new(move |_| {
        register.with(|register| register.catalog().categories().to_vec())
    });

    move || {
        let categories = categories.get();

        if categories.is_empty() {
            return view! {
                <div class="empty-state">
                    <div class="empty-state-icon">"📦"</div>
                    <h5>"No hay productos disponibles"</h5>
                    <p class="text-muted">"Contacta al administrador del sistema"</p>
                </div>
            }
            .into_any();
        }

        categories
            .into_iter()
            .map(|category| view! { <CategorySection category register /> })
            .collect_view()
            .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_badges_follow_stock_levels() {
        assert_eq!(
            stock_badge_class(StockLevel::from_stock(11)),
            "stock-badge badge bg-success"
        );
        assert_eq!(
            stock_badge_class(StockLevel::from_stock(10)),
            "stock-badge badge bg-warning"
        );
        assert_eq!(
            stock_badge_class(StockLevel::from_stock(0)),
            "stock-badge badge bg-danger"
        );
    }
}
