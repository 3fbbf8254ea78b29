use axum::{extract::State, response::Html};
use serde::Serialize;
use tera::{Context, Tera};

use crate::{
    error::{AppError, AppResult},
    handlers::SERVICE_NAME,
    AppState,
};

pub const SHOP_TEMPLATE: &str = "shop.html";

/// What the shop page needs per product.
#[derive(Debug, Serialize)]
struct ProductCard<'a> {
    id: u64,
    name: &'a str,
    price: String,
    image: &'a str,
    description: &'a str,
    category: &'a str,
}

/// Template set with the shop page embedded in the binary.
pub fn init_templates() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_template(SHOP_TEMPLATE, include_str!("../../templates/shop.html"))?;
    Ok(tera)
}

pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let cards: Vec<ProductCard<'_>> = state
        .catalog
        .list_all()
        .map(|p| ProductCard {
            id: p.id,
            name: &p.name,
            price: p.price_label(),
            image: &p.image,
            description: &p.description,
            category: &p.category,
        })
        .collect();

    let mut context = Context::new();
    context.insert("service", SERVICE_NAME);
    context.insert("products", &cards);

    let page = state
        .templates
        .render(SHOP_TEMPLATE, &context)
        .map_err(|e| AppError::Template(e.to_string()))?;

    Ok(Html(page))
}
