use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use phonebook_core::dto::ContactListItemDto;
use phonebook_store::ids::now_millis;
use phonebook_store::repo::ContactNew;
use phonebook_store::Store;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Skip the built-in sample contacts
    #[arg(long)]
    pub no_seed: bool,
}

pub fn list_contacts(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let seed_defaults = ctx.config.seed_defaults && !args.no_seed;
    let extra = ctx.config.contacts.iter().map(|contact| ContactNew {
        name: contact.name.clone(),
        phone: contact.phone.clone(),
    });
    let store =
        Store::bootstrap(seed_defaults, extra, now_millis()).with_context(|| "build contact book")?;

    let items: Vec<ContactListItemDto> = store
        .contacts()
        .list()
        .iter()
        .map(ContactListItemDto::from)
        .collect();

    if ctx.json {
        print_json(&items)?;
        return Ok(());
    }

    if items.is_empty() {
        println!("no contacts");
        return Ok(());
    }
    for item in items {
        println!("{}  {}  {}", item.id, item.name, item.phone);
    }
    Ok(())
}
