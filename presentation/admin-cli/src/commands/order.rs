use business::application::store::ProductStore;
use business::domain::product::value_objects::ProductId;

use crate::config::contact_config::ContactConfig;
use crate::ui::contact_link::{order_message, whatsapp_link};

pub fn run(store: &ProductStore, contact: &ContactConfig, id: &str) -> anyhow::Result<()> {
    let product = match store.find(&ProductId::new(id)) {
        Some(product) => product,
        None => match store.last_error() {
            Some(error) => anyhow::bail!(error),
            None => anyhow::bail!("No product with id '{}'.", id),
        },
    };

    let link = whatsapp_link(
        &contact.whatsapp_number,
        &order_message(&product, &contact.shop_name),
    )?;
    println!("{}", link);
    Ok(())
}
