use business::application::store::{StorePhase, StoreSnapshot};
use business::domain::product::model::Product;

pub fn render_card(product: &Product) -> String {
    format!(
        "{title}  ₦{price}\n  {description}\n  {image}\n  id: {id}",
        title = product.title,
        price = product.price,
        description = product.description,
        image = product.image_url,
        id = product.id,
    )
}

/// Renders the public listing, or a status line when there is nothing to show.
pub fn render_gallery(snapshot: &StoreSnapshot) -> String {
    if snapshot.phase == StorePhase::Loading {
        return "Loading products...".to_string();
    }

    let mut out = String::new();
    if let Some(error) = &snapshot.error {
        out.push_str(&format!("! {}\n", error));
    }

    if snapshot.products.is_empty() {
        if snapshot.error.is_none() {
            out.push_str("No products yet.\n");
        }
        return out;
    }

    let cards: Vec<String> = snapshot.products.iter().map(render_card).collect();
    out.push_str(&cards.join("\n\n"));
    out.push('\n');
    out
}
