use leptos::{logging, prelude::*};
use nixgelato::{
    cart::{LineId, LineItem},
    money::format_money,
    register::Register,
};

use super::{PLACEHOLDER_IMAGE, payment::PaymentPanel};

/// Quantity typed into a line's input. Only whole numbers are quantities, so
/// fractions such as `1.5` and unreadable input count as zero, which the cart
/// rejects.
pub(super) fn parse_quantity(input: &str) -> i64 {
    input.trim().parse().unwrap_or(0)
}

fn change_quantity(register: RwSignal<Register>, id: &LineId, input: &str) {
    let quantity = parse_quantity(input);

    // Always notify so a rejected value is replaced by the kept quantity.
    register.update(|register| {
        if let Err(error) = register.set_quantity(id, quantity) {
            logging::log!("quantity {quantity} ignored: {error}");
        }
    });
}

#[component]
fn CartLine(line: LineItem, register: RwSignal<Register>) -> impl IntoView {
    let id = line.id().clone();
    let remove_id = id.clone();
    let name = line.product().name.clone();
    let remove_label = format!("Quitar {name} del pedido");

    let image = line
        .product()
        .image
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    let toppings = line
        .toppings()
        .iter()
        .map(|topping| topping.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <div class="order-item">
            <img class="order-item-image" src=image alt=name.clone() />
            <div class="order-item-body">
                <div class="order-item-header">
                    <h6 class="order-item-name">{name}</h6>
                    <button
                        type="button"
                        class="btn-remove"
                        aria-label=remove_label
                        on:click=move |_| {
                            register.update(|register| {
                                register.remove_line(&remove_id);
                            });
                        }
                    >
                        "×"
                    </button>
                </div>
                {(!toppings.is_empty())
                    .then(|| view! { <small class="text-muted">{format!("+ {toppings}")}</small> })}
                <div class="order-item-footer">
                    <input
                        type="number"
                        class="form-control quantity-input"
                        min="1"
                        prop:value=line.quantity().to_string()
                        on:change=move |event| change_quantity(register, &id, &event_target_value(&event))
                    />
                    <span class="order-item-subtotal">{format_money(&line.subtotal())}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CartLines(register: RwSignal<Register>) -> impl IntoView {
    move || {
        let lines = register.with(|register| register.cart().iter().cloned().collect::<Vec<_>>());

        if lines.is_empty() {
            return view! {
                <div class="empty-state">
                    <div class="empty-state-icon">"📝"</div>
                    <h6>"Pedido vacío"</h6>
                    <p class="text-muted">"Agrega productos desde el menú"</p>
                </div>
            }
            .into_any();
        }

        lines
            .into_iter()
            .map(|line| view! { <CartLine line register /> })
            .collect_view()
            .into_any()
    }
}

/// Order lines and the payment form.
#[component]
pub(super) fn CartPanel(register: RwSignal<Register>, submitting: RwSignal<bool>) -> impl IntoView {
    view! {
        <aside class="order-panel">
            <h4>"🛒 Tu Pedido"</h4>
            <div class="order-items">
                <CartLines register />
            </div>
            <PaymentPanel register submitting />
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_input_is_read_as_a_whole_number() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity("-1"), -1);
    }

    #[test]
    fn unreadable_quantity_is_zero() {
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("dos"), 0);
        assert_eq!(parse_quantity("1.5"), 0);
    }
}
