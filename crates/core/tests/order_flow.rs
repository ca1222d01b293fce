//! End-to-end order flow: backend records in, invoice payload out.

use jiff::Timestamp;
use serde_json::json;
use testresult::TestResult;

use nixgelato::{
    catalog::{Catalog, CategoryRecord, ProductId, ToppingId, ToppingRecord},
    checkout::CheckoutError,
    money::{pesos, zero},
    register::{Phase, Register},
};

fn catalog() -> TestResult<Catalog> {
    let categories: Vec<CategoryRecord> = serde_json::from_value(json!([
        {
            "id": 1,
            "nombre": "Helados",
            "productos": [
                {
                    "id_producto": 10,
                    "nombre_producto": "Copa sencilla",
                    "precio_venta_unitario": "5000.00",
                    "stock_actual": 12,
                    "permite_toppings": true
                },
                {
                    "id": 11,
                    "nombre": "Paleta",
                    "precio": 3000,
                    "stock": 0
                }
            ]
        }
    ]))?;

    let toppings: Vec<ToppingRecord> = serde_json::from_value(json!([
        { "id_topping": 1, "nombre": "Chispas", "precio_adicional": 1200 },
        { "id_topping": 2, "nombre_topping": "Salsa de mora", "precio": "800" }
    ]))?;

    Ok(Catalog::from_records(categories, toppings))
}

#[test]
fn worked_example_from_records_to_invoice() -> TestResult {
    let mut register = Register::loading();
    register.finish_loading(catalog()?);

    register.select_product(ProductId::new(10))?;
    register.toggle_topping(ToppingId::new(1))?;
    register.toggle_topping(ToppingId::new(2))?;

    assert_eq!(register.current_price(), pesos(7000));

    let line = register.add_to_cart(Timestamp::from_millisecond(1_730_000_000_000)?)?;
    register.set_quantity(&line, 2)?;
    register.set_discount(pesos(2000));
    register.set_payment_method(Some("Efectivo".to_string()));
    register.set_amount_paid(pesos(15_000));

    let totals = register.totals();

    assert_eq!(totals.subtotal, pesos(14_000));
    assert_eq!(totals.discount, pesos(2000));
    assert_eq!(totals.total, pesos(12_000));
    assert_eq!(totals.change, pesos(3000));

    let invoice = register.prepare_invoice()?;

    assert_eq!(
        serde_json::to_value(&invoice)?,
        json!({
            "cliente": "",
            "subtotal": 14000,
            "descuento": 2000,
            "total": 12000,
            "metodo_pago": "Efectivo",
            "productos": [{
                "id": 10,
                "cantidad": 2,
                "precio": 7000,
                "tamano": "Único",
                "toppings": [1, 2]
            }]
        })
    );

    register.complete_sale();

    assert!(register.cart().is_empty());
    assert_eq!(register.totals().total, zero());
    assert_eq!(register.phase(), Phase::Browsing);

    Ok(())
}

#[test]
fn quantity_below_one_is_a_no_op() -> TestResult {
    let mut register = Register::with_catalog(catalog()?);

    register.select_product(ProductId::new(10))?;
    let line = register.add_to_cart(Timestamp::from_millisecond(1)?)?;
    register.set_quantity(&line, 3)?;

    assert!(register.set_quantity(&line, 0).is_err());
    assert_eq!(register.totals().subtotal, pesos(15_000));

    Ok(())
}

#[test]
fn checkout_is_blocked_until_cart_and_method_are_set() -> TestResult {
    let mut register = Register::with_catalog(catalog()?);

    assert!(!register.can_checkout());
    assert_eq!(register.prepare_invoice(), Err(CheckoutError::EmptyCart));

    register.select_product(ProductId::new(10))?;
    register.add_to_cart(Timestamp::from_millisecond(1)?)?;

    assert!(!register.can_checkout());
    assert_eq!(
        register.prepare_invoice(),
        Err(CheckoutError::MissingPaymentMethod)
    );

    register.set_payment_method(Some("Tarjeta".to_string()));

    assert!(register.can_checkout());
    assert_eq!(
        register.prepare_invoice(),
        Err(CheckoutError::InsufficientPayment {
            total: pesos(5000),
            paid: zero(),
        })
    );

    Ok(())
}

#[test]
fn out_of_stock_products_cannot_be_selected() -> TestResult {
    let mut register = Register::with_catalog(catalog()?);

    assert!(register.select_product(ProductId::new(11)).is_err());
    assert_eq!(register.phase(), Phase::Browsing);

    Ok(())
}
