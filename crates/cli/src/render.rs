//! Terminal tables.

use std::{io, ops::Range};

use nixgelato::{
    catalog::Catalog,
    money::format_money,
    payments::PaymentMethod,
    register::Register,
};
use tabled::{
    Table,
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

fn finish(builder: Builder, numeric_columns: Range<usize>) -> Table {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(numeric_columns), Alignment::right());

    table
}

/// Products by category, then toppings.
///
/// # Errors
///
/// Fails if `out` cannot be written.
pub fn write_catalog(out: &mut impl io::Write, catalog: &Catalog) -> io::Result<()> {
    if catalog.is_empty() {
        return writeln!(out, "No hay productos disponibles");
    }

    let mut products = Builder::default();
    products.push_record(["Categoría", "ID", "Producto", "Precio", "Stock", "Toppings"]);

    for category in catalog.categories() {
        for product in &category.products {
            products.push_record([
                category.name.clone(),
                product.id.to_string(),
                product.name.clone(),
                format_money(&product.price),
                product.stock.to_string(),
                if product.allows_toppings { "sí" } else { "no" }.to_string(),
            ]);
        }
    }

    writeln!(out, "{}", finish(products, 3..5))?;

    if catalog.toppings().is_empty() {
        return writeln!(out, "No hay toppings disponibles");
    }

    let mut toppings = Builder::default();
    toppings.push_record(["ID", "Topping", "Precio"]);

    for topping in catalog.toppings() {
        toppings.push_record([
            topping.id.to_string(),
            topping.name.clone(),
            format_money(&topping.price),
        ]);
    }

    writeln!(out, "{}", finish(toppings, 2..3))
}

/// Payment methods offered at checkout.
///
/// # Errors
///
/// Fails if `out` cannot be written.
pub fn write_payment_methods(out: &mut impl io::Write) -> io::Result<()> {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Método", "Descripción"]);

    for method in PaymentMethod::available() {
        builder.push_record([
            method.id.to_string(),
            method.name.to_string(),
            method.description.to_string(),
        ]);
    }

    writeln!(out, "{}", finish(builder, 0..1))
}

/// Cart lines followed by the totals.
///
/// # Errors
///
/// Fails if `out` cannot be written.
pub fn write_order(out: &mut impl io::Write, register: &Register) -> io::Result<()> {
    let mut builder = Builder::default();
    builder.push_record(["Producto", "Toppings", "Cant.", "Precio", "Subtotal"]);

    for line in register.cart().iter() {
        let toppings = line
            .toppings()
            .iter()
            .map(|topping| topping.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        builder.push_record([
            line.product().name.clone(),
            toppings,
            line.quantity().to_string(),
            format_money(&line.unit_price()),
            format_money(&line.subtotal()),
        ]);
    }

    writeln!(out, "{}", finish(builder, 2..5))?;

    let totals = register.totals();
    let form = register.form();

    if !form.customer.trim().is_empty() {
        writeln!(out, "Cliente:    {}", form.customer.trim())?;
    }

    if let Some(method) = form.payment_method() {
        writeln!(out, "Pago:       {method}")?;
    }

    writeln!(out, "Subtotal:   {}", format_money(&totals.subtotal))?;
    writeln!(out, "Descuento:  {}", format_money(&totals.discount))?;
    writeln!(out, "Total:      {}", format_money(&totals.total))?;
    writeln!(out, "Recibido:   {}", format_money(&form.amount_paid))?;
    writeln!(out, "Cambio:     {}", format_money(&totals.change))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use nixgelato::{
        catalog::{Category, Product, ProductId, Topping, ToppingId},
        money::pesos,
    };
    use testresult::TestResult;

    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![Category {
                id: None,
                name: "Helados".to_string(),
                products: vec![Product {
                    id: ProductId::new(10),
                    name: "Copa sencilla".to_string(),
                    price: pesos(5000),
                    stock: 12,
                    allows_toppings: true,
                    image: None,
                }],
            }],
            vec![Topping {
                id: ToppingId::new(1),
                name: "Chispas".to_string(),
                price: pesos(1200),
            }],
        )
    }

    #[test]
    fn catalog_lists_products_and_toppings() -> TestResult {
        let mut out = Vec::new();

        write_catalog(&mut out, &catalog())?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("Copa sencilla"), "missing product in {text}");
        assert!(text.contains("Helados"), "missing category in {text}");
        assert!(text.contains("Chispas"), "missing topping in {text}");

        Ok(())
    }

    #[test]
    fn empty_catalog_says_so() -> TestResult {
        let mut out = Vec::new();

        write_catalog(&mut out, &Catalog::default())?;

        assert_eq!(String::from_utf8(out)?, "No hay productos disponibles\n");

        Ok(())
    }

    #[test]
    fn payment_methods_are_listed() -> TestResult {
        let mut out = Vec::new();

        write_payment_methods(&mut out)?;

        let text = String::from_utf8(out)?;

        for name in ["Efectivo", "Transferencia", "Tarjeta"] {
            assert!(text.contains(name), "missing {name} in {text}");
        }

        Ok(())
    }

    #[test]
    fn order_shows_lines_and_totals() -> TestResult {
        let mut register = Register::with_catalog(catalog());

        register.select_product(ProductId::new(10))?;
        register.toggle_topping(ToppingId::new(1))?;
        register.add_to_cart(Timestamp::from_millisecond(1)?)?;
        register.set_customer("Ana");

        let mut out = Vec::new();

        write_order(&mut out, &register)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("Copa sencilla"), "missing line in {text}");
        assert!(text.contains("Chispas"), "missing topping in {text}");
        assert!(text.contains("Cliente:    Ana"), "missing customer in {text}");
        assert!(
            text.contains(&format!("Total:      {}", format_money(&pesos(6200)))),
            "missing total in {text}"
        );

        Ok(())
    }
}
