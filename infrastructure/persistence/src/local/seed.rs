use chrono::{Duration, Utc};

use super::record::ProductRecord;

const STARTER_CATALOG: [(&str, &str, f64, &str); 12] = [
    (
        "Boho Crochet Tote Bag",
        "Handcrafted bohemian-style tote bag perfect for daily use",
        18000.0,
        "https://images.pexels.com/photos/6045242/pexels-photo-6045242.jpeg?auto=compress&cs=tinysrgb&w=800",
    ),
    (
        "Cozy Crochet Slippers",
        "Warm and comfortable house slippers in soft yarn",
        11200.0,
        "https://images.pexels.com/photos/7691691/pexels-photo-7691691.jpeg?auto=compress&cs=tinysrgb&w=800",
    ),
    (
        "Vintage Crochet Top",
        "Elegant sleeveless crochet top with intricate patterns",
        26000.0,
        "https://images.pexels.com/photos/4946515/pexels-photo-4946515.jpeg?auto=compress&cs=tinysrgb&w=800",
    ),
    (
        "Chunky Knit Shrug",
        "Oversized cozy shrug perfect for layering",
        22000.0,
        "https://images.pexels.com/photos/7691728/pexels-photo-7691728.jpeg?auto=compress&cs=tinysrgb&w=800",
    ),
    (
        "Crochet Bucket Hat",
        "Trendy bucket hat with beautiful stitch patterns",
        12800.0,
        "https://images.pexels.com/photos/5691630/pexels-photo-5691630.jpeg?auto=compress&cs=tinysrgb&w=800",
    ),
    (
        "Baby Crochet Blanket",
        "Soft and gentle blanket perfect for little ones",
        30000.0,
        "https://images.pexels.com/photos/6032874/pexels-photo-6032874.jpeg?auto=compress&cs=tinysrgb&w=800",
    ),
    (
        "Crochet Market Bag",
        "Eco-friendly mesh bag for shopping and storage",
        14000.0,
        "https://images.pexels.com/photos/7078662/pexels-photo-7078662.jpeg?auto=compress&cs=tinysrgb&w=800",
    ),
    (
        "Amigurumi Cat",
        "Adorable handmade cat toy for children",
        16000.0,
        "https://images.pexels.com/photos/6373478/pexels-photo-6373478.jpeg?auto=compress&cs=tinysrgb&w=800",
    ),
    (
        "Crochet Cardigan",
        "Elegant long cardigan with button closure",
        34000.0,
        "https://images.pexels.com/photos/7691735/pexels-photo-7691735.jpeg?auto=compress&cs=tinysrgb&w=800",
    ),
    (
        "Crochet Headband",
        "Stylish headband with flower detail",
        8800.0,
        "https://images.pexels.com/photos/7691740/pexels-photo-7691740.jpeg?auto=compress&cs=tinysrgb&w=800",
    ),
    (
        "Crochet Scarf",
        "Long cozy scarf in beautiful gradient colors",
        15200.0,
        "https://images.pexels.com/photos/7691745/pexels-photo-7691745.jpeg?auto=compress&cs=tinysrgb&w=800",
    ),
    (
        "Crochet Poncho",
        "Stylish poncho perfect for any season",
        27200.0,
        "https://images.pexels.com/photos/7691750/pexels-photo-7691750.jpeg?auto=compress&cs=tinysrgb&w=800",
    ),
];

/// The shop's starter catalog, listed newest first.
pub fn starter_catalog() -> Vec<ProductRecord> {
    let now = Utc::now();
    STARTER_CATALOG
        .iter()
        .enumerate()
        .map(|(i, (title, description, price, image_url))| ProductRecord {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            price: *price,
            image_url: image_url.to_string(),
            created_at: now - Duration::seconds(i as i64),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_seed_twelve_valid_products_newest_first() {
        let catalog = starter_catalog();
        assert_eq!(catalog.len(), 12);
        assert!(catalog.windows(2).all(|w| w[0].created_at > w[1].created_at));
        assert!(catalog.iter().all(|r| r.clone().into_domain().is_ok()));
    }
}
