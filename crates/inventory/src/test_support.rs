use storefront_core::ProductId;
use storefront_products::{ColorEntry, Product, SizeEntry};

/// Colors `[Black:5, White:0]`, sizes `[9:3, 10:0]`.
pub(crate) fn sneaker() -> Product {
    Product::new(
        ProductId::new(),
        "Court Runner",
        Some(vec![
            ColorEntry::new("Black", 5)
                .with_hexcode("#000000")
                .with_images(["black-1.jpg", "black-2.jpg"]),
            ColorEntry::new("White", 0).with_hexcode("#ffffff"),
        ]),
        Some(vec![SizeEntry::new("9", 3), SizeEntry::new("10", 0)]),
    )
    .unwrap()
}

pub(crate) fn product(
    colors: Option<Vec<(&str, u32)>>,
    sizes: Option<Vec<(&str, u32)>>,
) -> Product {
    Product::new(
        ProductId::new(),
        "Fixture",
        colors.map(|cs| cs.into_iter().map(|(c, n)| ColorEntry::new(c, n)).collect()),
        sizes.map(|ss| ss.into_iter().map(|(s, n)| SizeEntry::new(s, n)).collect()),
    )
    .unwrap()
}
