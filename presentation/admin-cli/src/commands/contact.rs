use crate::config::contact_config::ContactConfig;
use crate::ui::contact_link::{custom_order_message, enquiry_message, whatsapp_link};

pub fn run(contact: &ContactConfig, custom_order: bool) -> anyhow::Result<()> {
    let message = if custom_order {
        custom_order_message(&contact.shop_name)
    } else {
        enquiry_message(&contact.shop_name)
    };

    println!("{}", whatsapp_link(&contact.whatsapp_number, &message)?);
    Ok(())
}
