//! Pure view-model producers: state in, render-ready data out. Nothing in
//! here touches the terminal, so the state logic stays unit-testable.

use crate::cart::Cart;
use crate::models::Product;
use crate::prices::{format_mxn, format_total_usd, parse_price};

/// Render-ready data for one product card.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub price_usd: String,
    pub price_mxn: String,
}

/// Render-ready data for one cart line item.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineView {
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub price_usd: String,
    pub price_mxn: String,
}

/// Render-ready cart: resolved line items, the display total, and the
/// action gating derived from the EMPTY / NON_EMPTY cart state.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total: String,
    pub checkout_enabled: bool,
    pub empty_enabled: bool,
}

/// One card per visible product, with the source price and its MXN
/// conversion at the given rate.
pub fn product_cards(products: &[Product], rate: f64) -> Vec<ProductCard> {
    products
        .iter()
        .map(|product| {
            let usd = parse_price(&product.price);
            ProductCard {
                id: product.id,
                name: product.name.clone(),
                image: product.image.clone(),
                price_usd: product.price.clone(),
                price_mxn: format_mxn(usd * rate),
            }
        })
        .collect()
}

/// Build the cart view. Lines referencing products missing from the
/// catalog are dropped from both the listing and the total.
pub fn cart_view(cart: &Cart, catalog: &[Product], rate: f64) -> CartView {
    let lines = cart
        .lines()
        .iter()
        .filter_map(|line| {
            catalog.iter().find(|p| p.id == line.id).map(|product| {
                let usd = parse_price(&product.price);
                CartLineView {
                    name: product.name.clone(),
                    image: product.image.clone(),
                    quantity: line.quantity,
                    price_usd: product.price.clone(),
                    price_mxn: format!("${:.2} MXN", usd * rate),
                }
            })
        })
        .collect();

    let non_empty = !cart.is_empty();
    CartView {
        lines,
        total: if non_empty {
            format_total_usd(cart.total_usd(catalog))
        } else {
            "$0".to_string()
        },
        checkout_enabled: non_empty,
        empty_enabled: non_empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, name: &str, price: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            price: price.to_string(),
            image: format!("https://example.com/img/{}.jpg", id),
            category: "tecnologia".to_string(),
        }
    }

    #[test]
    fn card_converts_source_price_at_the_given_rate() {
        let catalog = vec![product(5, "Teclado", "$1,234.50")];
        let cards = product_cards(&catalog, 18.0);

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].price_usd, "$1,234.50");
        assert_eq!(cards[0].price_mxn, "$22,221.00");
        assert_eq!(cards[0].id, 5);
    }

    #[test]
    fn empty_cart_view_disables_both_actions() {
        let view = cart_view(&Cart::new(), &[], 18.0);
        assert!(view.lines.is_empty());
        assert_eq!(view.total, "$0");
        assert!(!view.checkout_enabled);
        assert!(!view.empty_enabled);
    }

    #[test]
    fn cart_lines_keep_insertion_order() {
        let catalog = vec![
            product(3, "Gorra", "$12.00"),
            product(7, "Lámpara", "$45.75"),
        ];
        let mut cart = Cart::new();
        cart.add(7);
        cart.add(7);
        cart.add(3);

        let view = cart_view(&cart, &catalog, 18.0);
        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.lines[0].name, "Lámpara");
        assert_eq!(view.lines[0].quantity, 2);
        assert_eq!(view.lines[1].name, "Gorra");
        assert_eq!(view.lines[1].quantity, 1);
        assert!(view.checkout_enabled);
        assert!(view.empty_enabled);
    }

    #[test]
    fn missing_products_are_skipped_from_listing_and_total() {
        let catalog = vec![product(1, "Camiseta", "$19.99")];
        let mut cart = Cart::new();
        cart.add(1);
        cart.add(99); // stale id, not in the catalog

        let view = cart_view(&cart, &catalog, 18.0);
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.total, "$19,99");
    }
}
