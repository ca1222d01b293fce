//! Page selection by path.

/// Order screen path.
pub const ORDER_PATH: &str = "/pedido";

/// Pages served by this app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Public landing page
    Landing,

    /// Cashier order screen
    Order,
}

impl Route {
    /// Page for a location path. Unknown paths land on the landing page.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            ORDER_PATH => Self::Order,
            _ => Self::Landing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_path_with_or_without_trailing_slash() {
        assert_eq!(Route::from_path("/pedido"), Route::Order);
        assert_eq!(Route::from_path("/pedido/"), Route::Order);
    }

    #[test]
    fn everything_else_is_the_landing_page() {
        assert_eq!(Route::from_path("/"), Route::Landing);
        assert_eq!(Route::from_path(""), Route::Landing);
        assert_eq!(Route::from_path("/admin"), Route::Landing);
    }
}
