use std::io::{self, Write};

use clap::Args;
use jiff::Timestamp;
use nixgelato::{
    catalog::Catalog,
    money::{self, Amount},
    payments::PaymentMethod,
    register::Register,
};
use nixgelato_client::{SaleError, checkout, confirmation, load_catalog};
use tracing::info;

use crate::{config::ApiConfig, errors::CliError, item::ItemSpec, render};

use super::connect;

/// Sale details.
#[derive(Debug, Args)]
pub struct SellArgs {
    /// Product to add as `PRODUCT[:TOPPING,...][xQTY]`, e.g. `10:1,2x2`; repeatable
    #[arg(long = "item", required = true)]
    items: Vec<ItemSpec>,

    /// Customer name
    #[arg(long, default_value = "")]
    customer: String,

    /// Discount in pesos, capped at the subtotal
    #[arg(long, value_parser = money::parse, default_value = "0")]
    discount: Amount,

    /// Payment method name
    #[arg(long, value_parser = parse_payment_method)]
    payment: String,

    /// Amount received in pesos; the exact total when omitted
    #[arg(long, value_parser = money::parse)]
    paid: Option<Amount>,

    /// Print the invoice payload instead of sending it
    #[arg(long)]
    dry_run: bool,
}

fn parse_payment_method(input: &str) -> Result<String, String> {
    PaymentMethod::find(input)
        .map(|method| method.name.to_string())
        .ok_or_else(|| {
            let names = PaymentMethod::available()
                .iter()
                .map(|method| method.name)
                .collect::<Vec<_>>()
                .join(", ");

            format!("unknown payment method {input:?}, expected one of: {names}")
        })
}

fn build_order(catalog: Catalog, args: &SellArgs, now: Timestamp) -> Result<Register, CliError> {
    let mut register = Register::with_catalog(catalog);

    for item in &args.items {
        register.select_product(item.product)?;

        for topping in &item.toppings {
            register.toggle_topping(*topping)?;
        }

        let line = register.add_to_cart(now)?;

        register.set_quantity(&line, i64::from(item.quantity))?;
    }

    register.set_customer(args.customer.clone());
    register.set_discount(args.discount);
    register.set_payment_method(Some(args.payment.clone()));

    let paid = args.paid.unwrap_or_else(|| register.totals().total);
    register.set_amount_paid(paid);

    Ok(register)
}

pub(super) async fn run(api: &ApiConfig, args: SellArgs) -> Result<(), CliError> {
    let client = connect(api)?;
    let catalog = load_catalog(&client).await?;
    let mut register = build_order(catalog, &args, Timestamp::now())?;

    render::write_order(&mut io::stdout().lock(), &register)?;

    if args.dry_run {
        let invoice = register.prepare_invoice().map_err(SaleError::from)?;

        info!(lines = invoice.lines.len(), "dry run, invoice not sent");

        writeln!(io::stdout().lock(), "{}", serde_json::to_string_pretty(&invoice)?)?;

        return Ok(());
    }

    let receipt = checkout(&client, &mut register).await?;

    writeln!(io::stdout().lock(), "{}", confirmation(&receipt))?;

    Ok(())
}
