//! Payment Methods
//!
//! The backend has no payment-method endpoint yet, so the register offers a
//! fixed list.

/// A way the customer can pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentMethod {
    /// Stable id
    pub id: u32,

    /// Name sent to the backend as `metodo_pago`
    pub name: &'static str,

    /// Cashier-facing hint
    pub description: &'static str,

    /// Whether the method is offered
    pub active: bool,
}

const METHODS: [PaymentMethod; 3] = [
    PaymentMethod {
        id: 1,
        name: "Efectivo",
        description: "Pago en caja",
        active: true,
    },
    PaymentMethod {
        id: 2,
        name: "Transferencia",
        description: "Nequi/Daviplata",
        active: true,
    },
    PaymentMethod {
        id: 3,
        name: "Tarjeta",
        description: "Pago con tarjeta",
        active: true,
    },
];

impl PaymentMethod {
    /// Active payment methods in display order.
    pub fn available() -> Vec<PaymentMethod> {
        METHODS.into_iter().filter(|method| method.active).collect()
    }

    /// Find an active method by name, ignoring case.
    pub fn find(name: &str) -> Option<PaymentMethod> {
        let name = name.trim();

        Self::available()
            .into_iter()
            .find(|method| method.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_methods_are_available() {
        let names: Vec<&str> = PaymentMethod::available()
            .into_iter()
            .map(|method| method.name)
            .collect();

        assert_eq!(names, ["Efectivo", "Transferencia", "Tarjeta"]);
    }

    #[test]
    fn find_ignores_case_and_whitespace() {
        assert_eq!(
            PaymentMethod::find(" tarjeta ").map(|method| method.id),
            Some(3)
        );
        assert!(PaymentMethod::find("Bitcoin").is_none());
    }
}
