use serde::{Deserialize, Serialize};

/// One purchasable product as authored in the catalog resource.
///
/// The wire format keeps the Spanish field names the catalog is written
/// with; prices arrive as display strings ("$1,234.50") in the source
/// currency. Products are immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: String,
    #[serde(rename = "imagen")]
    pub image: String,
    #[serde(rename = "categoria")]
    pub category: String,
}

/// One (product, quantity) pairing inside the cart. The persisted cart is
/// a bare JSON array of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: u32,
    pub quantity: u32,
}
