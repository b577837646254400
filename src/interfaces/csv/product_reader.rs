use crate::domain::product::Product;
use crate::error::{PricingError, Result};
use std::io::Read;

/// Reads catalog entries from a CSV source with the header `id, name, base_price`.
///
/// Whitespace around fields is trimmed. Base prices are whole pence.
pub struct ProductReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ProductReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes one product per row.
    pub fn products(self) -> impl Iterator<Item = Result<Product>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PricingError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::price::Price;

    #[test]
    fn test_reader_valid_catalog() {
        let data = "id, name, base_price\n1, Stella, 540\n3, Coors Light, 420";
        let reader = ProductReader::new(data.as_bytes());
        let results: Vec<Result<Product>> = reader.products().collect();

        assert_eq!(results.len(), 2);
        let stella = results[0].as_ref().unwrap();
        assert_eq!(stella.id, 1);
        assert_eq!(stella.name, "Stella");
        assert_eq!(stella.base_price, Price(540));

        let coors = results[1].as_ref().unwrap();
        assert_eq!(coors.name, "Coors Light");
    }

    #[test]
    fn test_reader_rejects_fractional_price() {
        let data = "id, name, base_price\n1, Stella, 5.40";
        let reader = ProductReader::new(data.as_bytes());
        let results: Vec<Result<Product>> = reader.products().collect();

        assert!(matches!(results[0], Err(PricingError::CsvError(_))));
    }
}
