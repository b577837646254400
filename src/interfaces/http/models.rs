use crate::domain::board::{PriceBoard, PriceSnapshot};
use crate::domain::price::Price;
use crate::domain::price_state::Trend;
use crate::domain::product::{Product, ProductId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct MenuItem {
    pub id: ProductId,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub items: Vec<MenuItem>,
}

impl From<Vec<Product>> for MenuResponse {
    fn from(products: Vec<Product>) -> Self {
        Self {
            items: products
                .into_iter()
                .map(|product| MenuItem {
                    id: product.id,
                    name: product.name,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PriceResponse {
    pub id: ProductId,
    pub low: String,
    pub high: String,
    pub current: String,
    pub trend: Trend,
}

impl From<PriceSnapshot> for PriceResponse {
    fn from(snapshot: PriceSnapshot) -> Self {
        Self {
            id: snapshot.id,
            low: money(snapshot.low),
            high: money(snapshot.high),
            current: money(snapshot.current),
            trend: snapshot.trend,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PricesResponse {
    pub prices: Vec<PriceResponse>,
    pub crash: Option<ProductId>,
}

impl From<PriceBoard> for PricesResponse {
    fn from(board: PriceBoard) -> Self {
        Self {
            prices: board.prices.into_iter().map(PriceResponse::from).collect(),
            crash: board.crash,
        }
    }
}

/// Till event announcing a bill. Only the purchased product IDs matter.
#[derive(Debug, Default, Deserialize)]
pub struct BillEvent {
    #[serde(default)]
    pub bill: Bill,
}

#[derive(Debug, Default, Deserialize)]
pub struct Bill {
    #[serde(default)]
    pub products: Vec<BillProduct>,
}

#[derive(Debug, Deserialize)]
pub struct BillProduct {
    #[serde(rename = "flypayProductId")]
    pub id: ProductId,
}

fn money(price: Price) -> String {
    format!("£{}", price.major_units())
}
