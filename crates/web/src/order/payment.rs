use leptos::{html, prelude::*};
use nixgelato::{
    money::{self, Amount, format_money},
    payments::PaymentMethod,
    register::Register,
};

use super::submit_order;
use crate::browser;

const CLEAR_CONFIRMATION: &str = "¿Estás seguro de que quieres vaciar el pedido?";

/// Amount typed into a money input. `None` while the text is not a number
/// yet, so the previous amount is kept.
pub(super) fn amount_input(input: &str) -> Option<Amount> {
    money::parse(input).ok()
}

/// Text shown in a money input. Zero shows as empty so the placeholder is
/// visible.
pub(super) fn amount_text(amount: Amount) -> String {
    if amount.is_zero() {
        String::new()
    } else {
        money::to_decimal(amount).to_string()
    }
}

/// Replacement text for a money input whose amount changed elsewhere. `None`
/// when the field already reads as that amount, so text being typed such as
/// `2000.0` or `0` is left alone.
pub(super) fn synced_text(current: &str, amount: Amount) -> Option<String> {
    (amount_input(current) != Some(amount)).then(|| amount_text(amount))
}

fn payment_method_input(input: &str) -> Option<String> {
    let method = input.trim();

    (!method.is_empty()).then(|| method.to_string())
}

fn clear_order(register: RwSignal<Register>) {
    if browser::confirm(CLEAR_CONFIRMATION) {
        register.update(Register::clear_cart);
    }
}

/// Money field bound to an amount in the register. Typing commits parsed
/// amounts; the text is only rewritten when the amount changes to something
/// the field does not already show, such as after the order is cleared.
#[component]
fn AmountInput(
    #[prop(into)] class: String,
    amount: Memo<Amount>,
    on_amount: Callback<Amount>,
) -> impl IntoView {
    let input = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        let amount = amount.get();

        if let Some(element) = input.get()
            && let Some(text) = synced_text(&element.value(), amount)
        {
            element.set_value(&text);
        }
    });

    view! {
        <input
            node_ref=input
            type="number"
            class=class
            min="0"
            placeholder="0"
            on:input=move |event| {
                if let Some(value) = amount_input(&event_target_value(&event)) {
                    on_amount.run(value);
                }
            }
        />
    }
}

#[component]
fn TotalsSummary(register: RwSignal<Register>) -> impl IntoView {
    let totals = move || register.with(Register::totals);
    let discount = Memo::new(move |_| register.with(|register| register.form().discount));

    view! {
        <div class="totals-summary">
            <div class="summary-row">
                <span class="text-muted">"Subtotal:"</span>
                <span>{move || format_money(&totals().subtotal)}</span>
            </div>
            <div class="summary-row">
                <span class="text-muted">"Descuento:"</span>
                <AmountInput
                    class="form-control discount-input"
                    amount=discount
                    on_amount=Callback::new(move |discount| {
                        register.update(|register| register.set_discount(discount));
                    })
                />
            </div>
            <div class="summary-row summary-total">
                <span>"Total a pagar:"</span>
                <span>{move || format_money(&totals().total)}</span>
            </div>
        </div>
    }
}

/// Customer, payment method, amount received and the checkout buttons.
#[component]
pub(super) fn PaymentPanel(register: RwSignal<Register>, submitting: RwSignal<bool>) -> impl IntoView {
    let has_items = move || register.with(|register| !register.cart().is_empty());
    let amount_paid = Memo::new(move |_| register.with(|register| register.form().amount_paid));
    let missing_method =
        move || has_items() && register.with(|register| register.form().payment_method().is_none());

    view! {
        <TotalsSummary register />
        <div class="payment-panel">
            <label class="form-label">
                "👤 Cliente (opcional)"
                <input
                    type="text"
                    class="form-control"
                    placeholder="Nombre del cliente"
                    prop:value=move || register.with(|register| register.form().customer.clone())
                    on:input=move |event| {
                        let customer = event_target_value(&event);
                        register.update(|register| register.set_customer(customer));
                    }
                />
            </label>
            <label class="form-label">
                "💳 Método de pago"
                <select
                    class="form-select"
                    prop:value=move || {
                        register.with(|register| register.form().payment_method().unwrap_or_default().to_string())
                    }
                    on:change=move |event| {
                        let method = payment_method_input(&event_target_value(&event));
                        register.update(|register| register.set_payment_method(method));
                    }
                >
                    <option value="">"Seleccionar método..."</option>
                    {PaymentMethod::available()
                        .into_iter()
                        .map(|method| {
                            view! {
                                <option value=method.name title=method.description>
                                    {method.name}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <div class="payment-amounts">
                <label class="form-label">
                    "💰 Pago recibido"
                    <AmountInput
                        class="form-control"
                        amount=amount_paid
                        on_amount=Callback::new(move |paid| {
                            register.update(|register| register.set_amount_paid(paid));
                        })
                    />
                </label>
                <div class="form-label">
                    "🪙 Cambio"
                    <div class="change-amount">
                        {move || register.with(|register| format_money(&register.totals().change))}
                    </div>
                </div>
            </div>
            <div class="action-buttons">
                <button
                    type="button"
                    class="btn btn-brand btn-checkout"
                    disabled=move || !register.with(Register::can_checkout) || submitting.get()
                    on:click=move |_| submit_order(register, submitting)
                >
                    {move || {
                        register.with(|register| format!("💰 COBRAR {}", format_money(&register.totals().total)))
                    }}
                </button>
                {move || {
                    has_items()
                        .then(|| {
                            view! {
                                <button
                                    type="button"
                                    class="btn btn-outline-danger"
                                    on:click=move |_| clear_order(register)
                                >
                                    "🗑️ Vaciar Pedido"
                                </button>
                            }
                        })
                }}
            </div>
            {move || {
                missing_method()
                    .then(|| {
                        view! {
                            <div class="alert alert-warning">
                                "⚠️ Selecciona un método de pago para continuar"
                            </div>
                        }
                    })
            }}
        </div>
    }
}
