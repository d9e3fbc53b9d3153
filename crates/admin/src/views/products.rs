//! Products listing view.

use askama::Template;

use backline_core::Product;

use crate::client::{ApiClient, ApiClientError};
use crate::route::Route;
use crate::services;
use crate::view::{EventBinding, Slot, View};

use super::{ErrorRow, LoadingRow, format_money, render_template};

const SLOT: Slot = Slot {
    id: "productosTableBody",
    tag: "tbody",
};

const COLSPAN: usize = 7;

/// Shown when a product row has no image of its own.
const DEFAULT_IMAGE: &str = "./img/default-product.svg";

#[derive(Template)]
#[template(path = "views/products.html")]
struct ProductsTemplate;

#[derive(Template)]
#[template(path = "views/product_rows.html")]
struct ProductRowsTemplate {
    rows: Vec<ProductRow>,
}

/// One product, preformatted for the table.
struct ProductRow {
    id: i32,
    name: String,
    category: String,
    price: String,
    stock: i32,
    status_label: &'static str,
    badge_class: &'static str,
    image_url: String,
}

impl From<Product> for ProductRow {
    fn from(product: Product) -> Self {
        let (status_label, badge_class) = stock_status(product.stock);
        Self {
            id: product.id.as_i32(),
            name: product.name,
            category: product.category,
            price: format_money(product.price),
            stock: product.stock,
            status_label,
            badge_class,
            image_url: product
                .image_url
                .unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
        }
    }
}

/// Availability label from remaining stock.
const fn stock_status(stock: i32) -> (&'static str, &'static str) {
    if stock > 10 {
        ("Disponible", "bg-success")
    } else if stock > 0 {
        ("Pocas unidades", "bg-warning text-dark")
    } else {
        ("Agotado", "bg-danger")
    }
}

/// The product catalog table with row-level delete and an edit stub.
pub struct ProductsView;

impl View for ProductsView {
    fn route(&self) -> Route {
        Route::Products
    }

    fn slot(&self) -> Option<Slot> {
        Some(SLOT)
    }

    fn render(&self) -> String {
        render_template(&ProductsTemplate)
    }

    fn loading_fragment(&self) -> String {
        render_template(&LoadingRow {
            colspan: COLSPAN,
            label: "Cargando productos...",
        })
    }

    async fn load_data(&self, api: &ApiClient) -> Result<Option<String>, ApiClientError> {
        let products = services::products::get_all(api).await?;
        let rows = ProductRowsTemplate {
            rows: products.into_iter().map(ProductRow::from).collect(),
        };
        Ok(Some(render_template(&rows)))
    }

    fn error_fragment(&self, message: &str) -> String {
        render_template(&ErrorRow {
            colspan: COLSPAN,
            message: &format!("No se pudieron cargar los productos: {message}"),
        })
    }

    fn init_events(&self) -> Vec<EventBinding> {
        vec![
            EventBinding::Delegated { action: "delete" },
            EventBinding::Delegated { action: "edit" },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_thresholds() {
        assert_eq!(stock_status(11).0, "Disponible");
        assert_eq!(stock_status(10).0, "Pocas unidades");
        assert_eq!(stock_status(1).0, "Pocas unidades");
        assert_eq!(stock_status(0).0, "Agotado");
    }
}
