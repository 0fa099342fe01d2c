//! Seeded demo catalog.
//!
//! The storefront ships with a fixed product list; there is no backing store.

use crate::catalog::{Catalog, Category, Product};
use crate::ids::ProductId;
use crate::money::{Currency, Money};

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    name: &str,
    price: f64,
    image: &str,
    category: Category,
    description: &str,
    sizes: &[&str],
    colors: &[&str],
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Money::from_decimal(price, Currency::USD),
        image: image.to_string(),
        category,
        description: description.to_string(),
        sizes: sizes.iter().map(|s| s.to_string()).collect(),
        colors: colors.iter().map(|c| c.to_string()).collect(),
    }
}

/// The demo catalog shown by the storefront.
pub fn demo_catalog() -> Catalog {
    const GARMENT_SIZES: &[&str] = &["XS", "S", "M", "L", "XL"];
    const CHILD_SIZES: &[&str] = &["2T", "3T", "4T", "5T"];
    const ONE_SIZE: &[&str] = &["One Size"];

    Catalog::new(vec![
        entry(
            "1",
            "Traditional Silk Jeogori",
            189.99,
            "/images/traditional-silk-jeogori.jpg",
            Category::Wedding,
            "Hand-finished jeogori jacket in lustrous dupioni silk with contrast \
             goreum ties, made for wedding ceremonies and formal occasions.",
            GARMENT_SIZES,
            &["Ivory", "Crimson", "Navy"],
        ),
        entry(
            "2",
            "Wedding Hwarot Ceremonial Robe",
            389.99,
            "/images/wedding-hwarot.jpg",
            Category::Wedding,
            "Richly embroidered silk bridal robe with peony and phoenix motifs, \
             worn over the wedding hanbok during the paebaek ceremony.",
            &["S", "M", "L"],
            &["Scarlet", "Royal Blue"],
        ),
        entry(
            "3",
            "Everyday Cotton Hanbok",
            89.99,
            "/images/everyday-cotton-hanbok.jpg",
            Category::Casual,
            "Breathable cotton hanbok set cut for daily wear, with a relaxed \
             chima and simplified jeogori that machine-washes beautifully.",
            GARMENT_SIZES,
            &["Sage", "Dusty Rose", "Charcoal"],
        ),
        entry(
            "4",
            "Linen Summer Chima Skirt",
            64.99,
            "/images/linen-summer-chima.jpg",
            Category::Casual,
            "High-waisted wrap chima in washed linen, light enough for midsummer \
             and pleated to move with you.",
            &["S", "M", "L", "XL"],
            &["Natural", "Indigo", "Ochre"],
        ),
        entry(
            "5",
            "Quilted Durumagi Overcoat",
            179.99,
            "/images/quilted-durumagi.jpg",
            Category::Casual,
            "Winter-weight durumagi overcoat with diamond quilting and a modern \
             collar, layered over any hanbok or worn on its own.",
            GARMENT_SIZES,
            &["Black", "Camel"],
        ),
        entry(
            "6",
            "Children's First Birthday Hanbok",
            119.99,
            "/images/dol-hanbok.jpg",
            Category::Children,
            "Complete dol celebration set with jeogori, chima or baji, and a \
             matching bokgeon or jobawi hat for the first birthday table.",
            CHILD_SIZES,
            &["Rainbow Stripe", "Peach", "Mint"],
        ),
        entry(
            "7",
            "Children's Playtime Hanbok Set",
            74.99,
            "/images/playtime-hanbok.jpg",
            Category::Children,
            "Sturdy everyday hanbok for small adventurers, with snap closures \
             instead of ties and reinforced knees.",
            CHILD_SIZES,
            &["Sky Blue", "Lilac", "Sunflower"],
        ),
        entry(
            "8",
            "Modern Fusion Hanbok Dress",
            149.99,
            "/images/fusion-hanbok-dress.jpg",
            Category::Modern,
            "One-piece silhouette that folds the jeogori line into a \
             contemporary midi dress, office-friendly and ceremony-ready.",
            GARMENT_SIZES,
            &["Blush", "Forest", "Midnight"],
        ),
        entry(
            "9",
            "Modern Cropped Jeogori Jacket",
            99.99,
            "/images/cropped-jeogori.jpg",
            Category::Modern,
            "Cropped jeogori reimagined as a layering jacket in crisp silk \
             blend, pairs with denim as easily as with a chima.",
            &["XS", "S", "M", "L"],
            &["White", "Black", "Plum"],
        ),
        entry(
            "10",
            "Norigae Tassel Pendant",
            24.99,
            "/images/norigae-pendant.jpg",
            Category::Accessories,
            "Traditional norigae charm with knotted silk cord and hand-wound \
             tassel, clips to the goreum of any jeogori.",
            ONE_SIZE,
            &["Jade Green", "Coral", "Violet"],
        ),
        entry(
            "11",
            "Embroidered Silk Daenggi Ribbon",
            19.99,
            "/images/silk-daenggi.jpg",
            Category::Accessories,
            "Long braided-hair ribbon in embroidered silk with gilt thread \
             accents, finished with a traditional geumbak stamp.",
            ONE_SIZE,
            &["Crimson", "Black"],
        ),
        entry(
            "12",
            "Jade Binyeo Hairpin",
            34.99,
            "/images/jade-binyeo.jpg",
            Category::Accessories,
            "Carved jade binyeo hairpin with a lotus-bud head, the finishing \
             touch for an updo worn with formal hanbok.",
            ONE_SIZE,
            &["Jade", "Rose Quartz"],
        ),
    ])
}
