//! # Demo Catalog
//!
//! The hardcoded sample catalog used by the demo binary and tests. In a
//! real deployment the catalog would come from an API; the state manager
//! only ever sees a validated [`Catalog`] either way.

use shopease_core::{Catalog, Product};

fn product(
    id: &str,
    name: &str,
    price_cents: i64,
    category: &str,
    image: &str,
    description: &str,
    stock: i64,
    rating: f64,
    reviews: u32,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price_cents,
        category: category.to_string(),
        image: image.to_string(),
        description: description.to_string(),
        stock,
        rating,
        reviews,
    }
}

/// Builds the six-product sample catalog.
///
/// The data is static and known-valid, so construction cannot fail.
pub fn demo_catalog() -> Catalog {
    let products = vec![
        product(
            "1",
            "Premium Wireless Headphones",
            29999,
            "Electronics",
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e",
            "High-quality wireless headphones with noise cancellation",
            15,
            4.8,
            124,
        ),
        product(
            "2",
            "Smart Fitness Watch",
            19999,
            "Electronics",
            "https://images.unsplash.com/photo-1523275335684-37898b6baf30",
            "Track your fitness goals with this advanced smartwatch",
            23,
            4.6,
            89,
        ),
        product(
            "3",
            "Organic Cotton T-Shirt",
            2999,
            "Clothing",
            "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab",
            "Comfortable and sustainable cotton t-shirt",
            45,
            4.4,
            67,
        ),
        product(
            "4",
            "Professional Laptop",
            129999,
            "Electronics",
            "https://images.unsplash.com/photo-1496181133206-80ce9b88a853",
            "High-performance laptop for professionals",
            8,
            4.9,
            156,
        ),
        product(
            "5",
            "Designer Sunglasses",
            14999,
            "Accessories",
            "https://images.unsplash.com/photo-1572635196237-14b3f281503f",
            "Stylish sunglasses with UV protection",
            32,
            4.3,
            42,
        ),
        product(
            "6",
            "Wireless Speaker",
            8999,
            "Electronics",
            "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1",
            "Portable wireless speaker with rich sound",
            28,
            4.5,
            93,
        ),
    ];

    Catalog::try_new(products).expect("demo catalog is statically valid")
}

// =============================================================================
// Unit Tests
// =============================================================================
