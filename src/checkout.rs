use crate::view::CartView;

/// Compose the checkout message: greeting, one line per cart item in
/// display order, and the displayed total.
pub fn message(view: &CartView) -> String {
    let products: Vec<String> = view
        .lines
        .iter()
        .map(|line| format!("- {} (x{}) {}", line.name, line.quantity, line.price_usd))
        .collect();

    format!(
        "¡Hola! Me gustaría completar mi compra.\n\nProductos:\n{}\n\nTotal a pagar: {}\n",
        products.join("\n"),
        view.total
    )
}

/// Deep link that opens a chat with the shop, message prefilled.
pub fn url(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}
