use leptos::prelude::*;
use nixgelato::{
    cart::Selection,
    catalog::Topping,
    money::format_money,
    register::Register,
};

use super::{add_to_cart, toggle_topping};

#[component]
fn ToppingCard(topping: Topping, active: bool, register: RwSignal<Register>) -> impl IntoView {
    let id = topping.id;

    let (card_class, price_class, icon) = if active {
        ("topping-card topping-active", "topping-price text-success", "✅")
    } else {
        ("topping-card", "topping-price text-brand", "➕")
    };

    view! {
        <div class=card_class on:click=move |_| toggle_topping(register, id)>
            <div class="topping-icon" aria-hidden="true">{icon}</div>
            <h6 class="topping-name">{topping.name}</h6>
            <div class=price_class>{format!("+{}", format_money(&topping.price))}</div>
        </div>
    }
}

#[component]
fn ToppingGrid(
    toppings: Vec<Topping>,
    selection: Selection,
    register: RwSignal<Register>,
) -> impl IntoView {
    view! {
        <div class="toppings-panel">
            <h5>"🎯 Toppings Disponibles"</h5>
            <p class="text-muted">"Selecciona los toppings que deseas agregar"</p>
            {if toppings.is_empty() {
                view! {
                    <div class="empty-state">
                        <div class="empty-state-icon">"🍬"</div>
                        <h6>"No hay toppings disponibles"</h6>
                        <p class="text-muted">"Puedes continuar sin toppings"</p>
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <div class="topping-grid">
                        {toppings
                            .into_iter()
                            .map(|topping| {
                                let active = selection.is_selected(topping.id);

                                view! { <ToppingCard topping active register /> }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn SelectionSummary(selection: Selection) -> impl IntoView {
    let toppings = selection.toppings().to_vec();

    view! {
        <div class="selection-summary">
            <h6>"📋 Resumen del Producto"</h6>
            <div class="summary-row">
                <span>"Producto base:"</span>
                <span>{format_money(&selection.product().price)}</span>
            </div>
            {(!toppings.is_empty())
                .then(|| {
                    view! {
                        <div class="summary-toppings">
                            <div>"Toppings seleccionados:"</div>
                            {toppings
                                .into_iter()
                                .map(|topping| {
                                    view! {
                                        <span class="badge bg-light">
                                            {format!(
                                                "{} (+{})",
                                                topping.name,
                                                format_money(&topping.price),
                                            )}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
            <div class="summary-row summary-total">
                <span>"Total del producto:"</span>
                <span>{format_money(&selection.unit_price())}</span>
            </div>
        </div>
    }
}

/// Topping picker and price summary for the product being customized.
#[component]
pub(super) fn ProductCustomizer(register: RwSignal<Register>) -> impl IntoView {
    let selection = Memo::new(move |_| register.with(|register| register.selection().cloned()));
    let toppings = Memo::new(move |_| register.with(|register| register.catalog().toppings().to_vec()));

    move || {
        let Some(selection) = selection.get() else {
            return ().into_any();
        };

        view! {
            <div class="customizer">
                <button
                    type="button"
                    class="btn btn-outline"
                    on:click=move |_| register.update(Register::cancel_selection)
                >
                    "← Volver al Menú"
                </button>
                <div class="customizer-body">
                    {selection
                        .product()
                        .allows_toppings
                        .then(|| {
                            view! {
                                <ToppingGrid
                                    toppings=toppings.get()
                                    selection=selection.clone()
                                    register
                                />
                            }
                        })}
                    <SelectionSummary selection />
                </div>
                <div class="add-panel">
                    <div class="add-panel-icon" aria-hidden="true">"🛒"</div>
                    <h5>"¿Listo para agregar?"</h5>
                    <p class="text-muted">"Agrega este producto personalizado a tu pedido actual"</p>
                    <button type="button" class="btn btn-brand" on:click=move |_| add_to_cart(register)>
                        "Agregar al Pedido"
                    </button>
                </div>
            </div>
        }
        .into_any()
    }
}
