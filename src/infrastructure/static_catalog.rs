use crate::domain::product::Product;

/// The built-in happy-hour menu, prices in pence.
pub fn happy_hour_menu() -> Vec<Product> {
    vec![
        Product::new(1, "Stella", 540),
        Product::new(2, "Carlsberg", 480),
        Product::new(3, "Coors Light", 420),
        Product::new(4, "Carling", 480),
        Product::new(5, "Budweiser", 480),
    ]
}
