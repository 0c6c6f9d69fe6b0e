use business::application::store::{ProductStore, StoreSnapshot};

use crate::ui::gallery::render_gallery;

pub fn run(store: &ProductStore, json: bool) -> anyhow::Result<()> {
    print!("{}", gallery_output(&store.snapshot(), json)?);
    Ok(())
}

/// A failed load with nothing to show is an error, reported once by the caller.
fn gallery_output(snapshot: &StoreSnapshot, json: bool) -> anyhow::Result<String> {
    if let Some(error) = &snapshot.error
        && snapshot.products.is_empty()
    {
        anyhow::bail!("{}", error);
    }

    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&snapshot.products)?))
    } else {
        Ok(render_gallery(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::application::store::StorePhase;
    use business::domain::product::model::Product;
    use business::domain::product::value_objects::{Price, ProductId};
    use chrono::{TimeZone, Utc};

    fn snapshot(products: Vec<Product>, error: Option<&str>) -> StoreSnapshot {
        StoreSnapshot {
            products,
            loading: false,
            error: error.map(str::to_string),
            phase: StorePhase::Ready,
        }
    }

    fn product() -> Product {
        Product {
            id: ProductId::new("p-1"),
            title: "Crochet Bucket Hat".to_string(),
            description: "Trendy bucket hat".to_string(),
            price: Price::new(12800.0).unwrap(),
            image_url: "https://images.example.com/hat.jpeg".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn should_report_failed_load_only_as_error() {
        let result = gallery_output(&snapshot(vec![], Some("Failed to load products.")), false);

        let error = result.unwrap_err();
        assert_eq!(error.to_string(), "Failed to load products.");
    }

    #[test]
    fn should_print_listing_with_error_line_when_products_remain() {
        let output =
            gallery_output(&snapshot(vec![product()], Some("Could not save.")), false).unwrap();

        assert_eq!(output.matches("Could not save.").count(), 1);
        assert!(output.contains("Crochet Bucket Hat"));
    }

    #[test]
    fn should_print_camel_case_json() {
        let output = gallery_output(&snapshot(vec![product()], None), true).unwrap();

        assert!(output.contains("\"imageUrl\""));
        assert!(output.contains("\"createdAt\""));
    }
}
