//! Seed the data service with a demo catalog.

use chrono::{Days, Utc};
use rust_decimal::Decimal;
use tracing::info;

use backline_api::datastore::{
    DataServiceClient, banners::NewBanner, products::NewProduct, promotions::NewPromotion,
};
use backline_core::{Banner, DiscountType, Product, Promotion, PublicationStatus};

/// Insert demo products, one promotion, and one banner.
///
/// # Errors
///
/// Returns an error if the environment is incomplete or any insert fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = super::data_service_from_env()?;
    let client = DataServiceClient::new(&config);

    let products = demo_products();
    for product in &products {
        let created: Product = backline_api::datastore::products::insert(&client, product).await?;
        info!(id = %created.id, name = %created.name, "Producto insertado");
    }

    let today = Utc::now().date_naive();
    let next_month = today.checked_add_days(Days::new(30)).unwrap_or(today);

    let promotion = NewPromotion {
        name: "20% de descuento en CDs".to_string(),
        description: Some("Válido en todo el catálogo de CDs".to_string()),
        discount_type: DiscountType::Percentage,
        discount_value: Decimal::new(20, 0),
        start_date: today,
        end_date: next_month,
        status: PublicationStatus::Active,
    };
    let created: Promotion =
        backline_api::datastore::promotions::insert(&client, &promotion).await?;
    info!(id = %created.id, "Promoción insertada");

    let banner = NewBanner {
        title: "Nuevo stock de vinilos".to_string(),
        image_url: "https://backline.pe/uploads/banner-vinilos.jpg".to_string(),
        link_url: None,
        start_date: today,
        end_date: next_month,
        status: PublicationStatus::Active,
    };
    let created: Banner = backline_api::datastore::banners::insert(&client, &banner).await?;
    info!(id = %created.id, "Banner insertado");

    info!(products = products.len(), "Catálogo de demostración insertado");
    Ok(())
}

fn demo_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            name: "Parche bordado logo clásico".to_string(),
            category: "Parches".to_string(),
            price: Decimal::new(1500, 2),
            stock: 40,
            description: Some("Parche bordado de 9cm para casacas y mochilas".to_string()),
            image_url: None,
        },
        NewProduct {
            name: "CD en vivo - Gira 2023".to_string(),
            category: "CDs".to_string(),
            price: Decimal::new(3500, 2),
            stock: 25,
            description: Some("Grabado en Lima, edición limitada".to_string()),
            image_url: None,
        },
        NewProduct {
            name: "Vinilo de estudio 180g".to_string(),
            category: "Vinilos".to_string(),
            price: Decimal::new(8990, 2),
            stock: 8,
            description: None,
            image_url: None,
        },
        NewProduct {
            name: "Polo negro de gira".to_string(),
            category: "Merch".to_string(),
            price: Decimal::new(4500, 2),
            stock: 60,
            description: Some("Algodón 100%, serigrafía por ambos lados".to_string()),
            image_url: None,
        },
        NewProduct {
            name: "Llavero púa metálica".to_string(),
            category: "Accesorios".to_string(),
            price: Decimal::new(800, 2),
            stock: 0,
            description: None,
            image_url: None,
        },
    ]
}
