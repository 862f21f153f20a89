//! Terminal presentation of the view models. Every draw call re-emits its
//! whole section, so a redraw after any mutation fully replaces the last
//! one (no incremental diffing).

use crate::view::{CartView, ProductCard};
use anyhow::Result;
use std::io::Write;

/// Draw the exchange-rate line. On fetch failure the caller passes the
/// literal "Error" marker.
pub fn draw_rate(out: &mut impl Write, rate_display: &str) -> Result<()> {
    writeln!(out, "Tipo de cambio USD→MXN: {}", rate_display)?;
    Ok(())
}

/// Draw the product grid for the current page.
pub fn draw_products(
    out: &mut impl Write,
    heading: &str,
    rate_display: &str,
    cards: &[ProductCard],
) -> Result<()> {
    writeln!(out, "=== {} ===", heading)?;
    draw_rate(out, rate_display)?;
    writeln!(out)?;

    for card in cards {
        writeln!(out, "[{}] {}", card.id, card.name)?;
        writeln!(out, "    {}  ({})", card.price_usd, card.price_mxn)?;
        writeln!(out, "    {}", card.image)?;
        writeln!(out)?;
    }

    Ok(())
}

/// Draw the cart: one line item per resolvable cart line, then the total.
pub fn draw_cart(out: &mut impl Write, view: &CartView) -> Result<()> {
    writeln!(out, "--- Carrito ---")?;

    if view.lines.is_empty() && !view.empty_enabled {
        writeln!(out, "Tu carrito está vacío.")?;
    } else {
        for line in &view.lines {
            writeln!(out, "🛍️  {} (x{})", line.name, line.quantity)?;
            writeln!(out, "    {} ({})", line.price_usd, line.price_mxn)?;
            writeln!(out, "    {}", line.image)?;
        }
    }

    writeln!(out, "Total: {}", view.total)?;
    Ok(())
}

/// Draw the checkout handoff: the composed message and the deep link to
/// open in a browser.
pub fn draw_checkout(out: &mut impl Write, message: &str, url: &str) -> Result<()> {
    writeln!(out, "--- Pago por WhatsApp ---")?;
    writeln!(out, "{}", message)?;
    writeln!(out, "Abre este enlace para completar la compra:")?;
    writeln!(out, "{}", url)?;
    Ok(())
}

/// Transient confirmation notification.
pub fn toast(out: &mut impl Write, message: &str) -> Result<()> {
    writeln!(out, "🛒 {}", message)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::CartLineView;

    #[test]
    fn rate_failure_renders_the_error_marker() {
        let mut out = Vec::new();
        draw_rate(&mut out, "Error").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Tipo de cambio USD→MXN: Error\n"
        );
    }

    #[test]
    fn empty_cart_draws_the_empty_message_and_zero_total() {
        let view = CartView {
            lines: vec![],
            total: "$0".to_string(),
            checkout_enabled: false,
            empty_enabled: false,
        };

        let mut out = Vec::new();
        draw_cart(&mut out, &view).unwrap();
        let drawn = String::from_utf8(out).unwrap();
        assert!(drawn.contains("Tu carrito está vacío."));
        assert!(drawn.contains("Total: $0"));
    }

    #[test]
    fn cart_lines_render_with_quantity_and_both_prices() {
        let view = CartView {
            lines: vec![CartLineView {
                name: "Teclado mecánico".to_string(),
                image: "https://example.com/img/5.jpg".to_string(),
                quantity: 2,
                price_usd: "$1,234.50".to_string(),
                price_mxn: "$22221.00 MXN".to_string(),
            }],
            total: "$2469,00".to_string(),
            checkout_enabled: true,
            empty_enabled: true,
        };

        let mut out = Vec::new();
        draw_cart(&mut out, &view).unwrap();
        let drawn = String::from_utf8(out).unwrap();
        assert!(drawn.contains("Teclado mecánico (x2)"));
        assert!(drawn.contains("$1,234.50 ($22221.00 MXN)"));
        assert!(drawn.contains("Total: $2469,00"));
    }
}
