use crate::models::Product;

static DEFAULT_IMAGE: &str = "shirt.png";

/// The built-in catalog, in display order.
pub fn default_products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Essential Tee",
            25.00,
            DEFAULT_IMAGE,
            "Classic minimalist t-shirt in premium cotton",
            "tops",
        ),
        Product::new(
            2,
            "Premium Hoodie",
            45.00,
            DEFAULT_IMAGE,
            "Comfortable hoodie with modern fit",
            "tops",
        ),
        Product::new(
            3,
            "Slim Jeans",
            65.00,
            DEFAULT_IMAGE,
            "Tailored denim with stretch comfort",
            "bottoms",
        ),
        Product::new(
            4,
            "Classic Sneakers",
            85.00,
            DEFAULT_IMAGE,
            "Minimalist white sneakers",
            "shoes",
        ),
        Product::new(
            5,
            "Oversized Tee",
            30.00,
            DEFAULT_IMAGE,
            "Relaxed fit oversized t-shirt",
            "tops",
        ),
        Product::new(
            6,
            "Cargo Pants",
            70.00,
            DEFAULT_IMAGE,
            "Modern cargo pants with multiple pockets",
            "bottoms",
        ),
    ]
}
