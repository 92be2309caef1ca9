//! Built-in fallback catalog.
//!
//! Served whenever the hosted backend is unreachable or returns records
//! that fail normalization, so the storefront always has something to
//! show. Also the seed data for `paraiso-cli seed`.

use crate::catalog::Product;
use crate::types::{Price, ProductId, Slug};

/// The static fallback products, in catalog order.
///
/// Built fresh on each call; the fallback path only runs when a backend
/// read has already failed, so the allocation is noise there.
#[must_use]
pub fn fallback_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            slug: Slug::parse("mate-imperial").expect("static slug"),
            category: "mates".to_string(),
            name: "Mate Imperial".to_string(),
            description: "Mate de ceramica artesanal con diseño elegante y moderno. Perfecto \
                          para los que valoran el estilo y la tradicion."
                .to_string(),
            price: Price::new(15000),
            material: Some("ceramica".to_string()),
            stock: 25,
            rating: 4.9,
            image: "https://thehouseofmate.com/cdn/shop/files/69A55BE3-7BEB-42A0-A5FB-160F0275BC71.jpg?v=1723560623&width=713".to_string(),
            featured: true,
            in_stock: true,
        },
        Product {
            id: ProductId::new("2"),
            slug: Slug::parse("mate-torpedo").expect("static slug"),
            category: "mates".to_string(),
            name: "Mate Torpedo".to_string(),
            description: "Mate de forma torpedo, diseño ergonomico tradicional. Material \
                          resistente y duradero para disfrutar el mate autentico."
                .to_string(),
            price: Price::new(18000),
            material: Some("calabaza".to_string()),
            stock: 30,
            rating: 4.8,
            image: "https://thehouseofmate.com/cdn/shop/files/27CA003A-D98C-45DB-BE09-3E8B148E564A.jpg?v=1723560799&width=713".to_string(),
            featured: true,
            in_stock: true,
        },
        Product {
            id: ProductId::new("3"),
            slug: Slug::parse("bombilla-pico-de-loro").expect("static slug"),
            category: "bombillas".to_string(),
            name: "Bombilla Pico de Loro".to_string(),
            description: "Bombilla de alpaca con el clasico diseño pico de loro. Filtro de \
                          calidad premium para una experiencia optima."
                .to_string(),
            price: Price::new(8500),
            material: Some("alpaca".to_string()),
            stock: 50,
            rating: 4.9,
            image: "https://thehouseofmate.com/cdn/shop/files/bombillas_e73d8811-dbaf-4cb9-b564-ae7dcfefea40.jpg?v=1715308072&width=713".to_string(),
            featured: true,
            in_stock: true,
        },
        Product {
            id: ProductId::new("4"),
            slug: Slug::parse("set-matero").expect("static slug"),
            category: "kits".to_string(),
            name: "Set Matero".to_string(),
            description: "Set completo del matero: termo con capacidad de 1L, mate artesanal y \
                          bombilla pico de loro. Todo lo que necesitas para disfrutar el mate \
                          como un verdadero argentino."
                .to_string(),
            price: Price::new(45000),
            material: Some("varios".to_string()),
            stock: 12,
            rating: 5.0,
            image: "https://thehouseofmate.com/cdn/shop/files/TERMO_MATE_BOMBILLA.png?v=1746855733&width=713".to_string(),
            featured: true,
            in_stock: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_and_slugs_are_unique() {
        let products = fallback_products();
        for (i, a) in products.iter().enumerate() {
            for b in products.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
                assert_ne!(a.slug, b.slug);
            }
        }
    }

    #[test]
    fn every_product_is_sellable() {
        for product in fallback_products() {
            assert!(product.in_stock);
            assert!(product.stock > 0);
            assert!(product.price > Price::ZERO);
        }
    }
}
