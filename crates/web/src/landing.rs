//! Public landing page.

use leptos::prelude::*;
use nixgelato::landing::{METRICS, MetricRotation};

#[cfg(target_arch = "wasm32")]
use nixgelato::landing::ROTATION_PERIOD;

use crate::browser::LOGIN_PATH;

const HERO_IMAGE: &str = "https://images.pexels.com/photos/5060281/pexels-photo-5060281.jpeg?auto=compress&cs=tinysrgb&w=800";

/// Title and body of a landing section card.
#[derive(Debug)]
struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

static BENEFITS: [Feature; 3] = [
    Feature {
        icon: "⚡",
        title: "Pedidos rápidos",
        body: "Registra pedidos en segundos con un flujo pensado para cajas ocupadas y filas largas.",
    },
    Feature {
        icon: "📊",
        title: "Todo bajo control",
        body: "Visualiza el total del pedido, descuentos aplicados y método de pago en un solo lugar.",
    },
    Feature {
        icon: "🧩",
        title: "Flexible y modular",
        body: "Agrega nuevos productos, categorías y toppings sin cambiar la forma de trabajar de tu equipo.",
    },
];

static STEPS: [Feature; 3] = [
    Feature {
        icon: "1",
        title: "Configura tu heladería",
        body: "Crea tus categorías, productos y toppings desde el panel de administración.",
    },
    Feature {
        icon: "2",
        title: "Toma el pedido",
        body: "El cajero selecciona el producto, ajusta cantidades y añade toppings opcionales.",
    },
    Feature {
        icon: "3",
        title: "Cobra y registra la venta",
        body: "El sistema calcula el total, aplica descuentos y guarda la factura con el método de pago elegido.",
    },
];

/// Cycle the highlighted metric until the page unmounts.
#[cfg(target_arch = "wasm32")]
fn start_rotation(rotation: RwSignal<MetricRotation>) {
    let tick = move || {
        rotation.update(|rotation| {
            rotation.advance();
        });
    };

    match set_interval_with_handle(tick, ROTATION_PERIOD) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(error) => leptos::logging::warn!("metric rotation unavailable: {error:?}"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn start_rotation(_rotation: RwSignal<MetricRotation>) {}

#[component]
fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-icon" aria-hidden="true">{feature.icon}</div>
            <h5 class="feature-title">{feature.title}</h5>
            <p class="feature-body">{feature.body}</p>
        </div>
    }
}

#[component]
fn MetricHighlight(rotation: RwSignal<MetricRotation>) -> impl IntoView {
    view! {
        <div class="metric-highlight" aria-live="polite">
            <div class="metric-value">{move || rotation.with(|rotation| rotation.current().value)}</div>
            <small class="metric-label">{move || rotation.with(|rotation| rotation.current().label)}</small>
            <div class="metric-dots" aria-hidden="true">
                {(0..METRICS.len())
                    .map(|index| {
                        view! {
                            <span class=move || {
                                if rotation.with(|rotation| rotation.index() == index) {
                                    "metric-dot metric-dot-active"
                                } else {
                                    "metric-dot"
                                }
                            }></span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Landing page.
#[component]
pub fn LandingPage() -> impl IntoView {
    let rotation = RwSignal::new(MetricRotation::new());

    start_rotation(rotation);

    view! {
        <nav class="navbar">
            <a class="navbar-brand" href="/">"🍨 NixGelato"</a>
            <a class="btn btn-outline" href=LOGIN_PATH>"Iniciar sesión"</a>
        </nav>
        <main class="landing">
            <section class="hero">
                <div class="hero-copy">
                    <span class="hero-tag">"✨ Versión demo para heladerías modernas"</span>
                    <h1>"¡Bienvenido a " <span class="text-brand">"NixGelato"</span> "!"</h1>
                    <p class="lead">
                        "Administra fácilmente los pedidos de tu heladería con una interfaz moderna, rápida y adaptable. Controla sabores, toppings y cobros en cuestión de segundos."
                    </p>
                    <a class="btn btn-brand" href=LOGIN_PATH>"Comenzar ahora"</a>
                </div>
                <img class="hero-image" src=HERO_IMAGE alt="Helados y toppings" />
            </section>

            <section class="about">
                <div class="about-card">
                    <h5>"❓ ¿Qué es NixGelato?"</h5>
                    <p>
                        "Es una aplicación diseñada para gestionar los procesos de venta en heladerías. Permite tomar pedidos, calcular totales automáticamente y simplificar el flujo de trabajo del cajero."
                    </p>
                    <ul class="checklist">
                        <li>"Agrega productos y toppings con un clic."</li>
                        <li>"Aplica descuentos sin hacer cuentas a mano."</li>
                        <li>"Obtén un resumen del pedido antes de cobrar."</li>
                    </ul>
                </div>
                <div class="about-card">
                    <h5>"🚀 Escalable a futuro"</h5>
                    <p>"Esta versión está pensada para crecer con tu negocio:"</p>
                    <ul class="checklist">
                        <li>"Integración con inventario y control de stock."</li>
                        <li>"Reportes automáticos de ventas y cierres de caja."</li>
                        <li>"Manejo de múltiples usuarios y roles."</li>
                    </ul>
                </div>
            </section>

            <section class="benefits">
                <h2>"Beneficios clave"</h2>
                <div class="feature-grid">
                    {BENEFITS.iter().map(|feature| view! { <FeatureCard feature /> }).collect_view()}
                </div>
            </section>

            <section id="como-funciona" class="steps">
                <h2>"¿Cómo funciona NixGelato?"</h2>
                <div class="feature-grid">
                    {STEPS.iter().map(|feature| view! { <FeatureCard feature /> }).collect_view()}
                </div>
            </section>

            <section class="real-shops">
                <div>
                    <h5>"🍦 Pensado para heladerías reales"</h5>
                    <p>
                        "Ideal para proyectos académicos, pruebas con clientes o la primera versión de tu sistema de punto de venta."
                    </p>
                </div>
                <MetricHighlight rotation />
            </section>
        </main>
    }
}
