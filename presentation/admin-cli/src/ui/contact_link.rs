use url::Url;

use business::domain::product::model::Product;

pub fn order_message(product: &Product, shop_name: &str) -> String {
    format!(
        "Hi! I'm interested in \"{title}\" from {shop}.\n\n\
         Product Details:\n\
         - Name: {title}\n\
         - Description: {description}\n\
         - Price: ₦{price}\n\n\
         Could you please provide more details about this item?",
        title = product.title,
        shop = shop_name,
        description = product.description,
        price = product.price,
    )
}

pub fn custom_order_message(shop_name: &str) -> String {
    format!("Hi! I want to make a custom order from {}.", shop_name)
}

pub fn enquiry_message(shop_name: &str) -> String {
    format!("Hi! I'd like to learn more about {} products.", shop_name)
}

/// `https://wa.me/<number>?text=<message>` with the message query-encoded.
pub fn whatsapp_link(number: &str, message: &str) -> anyhow::Result<Url> {
    let base = format!("https://wa.me/{}", number.trim());
    Ok(Url::parse_with_params(&base, &[("text", message)])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::value_objects::{Price, ProductId};
    use chrono::Utc;

    fn product() -> Product {
        Product {
            id: ProductId::new("p-1"),
            title: "Cozy Crochet Slippers".to_string(),
            description: "Warm house slippers".to_string(),
            price: Price::new(11200.0).unwrap(),
            image_url: "https://images.example.com/slippers.jpeg".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn should_name_product_price_and_shop_in_order_message() {
        let message = order_message(&product(), "Hammies Yarnistry");

        assert!(message.contains("\"Cozy Crochet Slippers\" from Hammies Yarnistry"));
        assert!(message.contains("- Description: Warm house slippers"));
        assert!(message.contains("- Price: ₦11,200"));
    }

    #[test]
    fn should_encode_message_into_text_parameter() {
        let message = order_message(&product(), "Hammies Yarnistry");

        let link = whatsapp_link("+2347031272217", &message).unwrap();

        assert_eq!(link.host_str(), Some("wa.me"));
        assert_eq!(link.path(), "/+2347031272217");
        let text = link
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned());
        assert_eq!(text, Some(message));
    }

    #[test]
    fn should_build_generic_contact_link() {
        let link = whatsapp_link("+2347031272217", &custom_order_message("Hammies Yarnistry")).unwrap();

        assert!(link.as_str().starts_with("https://wa.me/+2347031272217?text="));
    }
}
