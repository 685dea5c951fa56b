use crate::commands::print_json;
use crate::error::invalid_input;
use anyhow::Result;
use clap::Args;
use phonebook_core::domain::normalize_phone;
use phonebook_core::dto::NormalizedPhoneDto;
use phonebook_core::rules::{validate_draft, validate_phone};

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    pub phone: String,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, required_unless_present = "phone")]
    pub name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
}

pub fn normalize(json: bool, args: NormalizeArgs) -> Result<()> {
    let normalized = normalize_phone(&args.phone);
    let error = validate_phone(&args.phone).err();

    if json {
        print_json(&NormalizedPhoneDto {
            input: args.phone.clone(),
            normalized: normalized.clone(),
            error: error.map(|err| err.to_string()),
        })?;
    } else {
        println!("{}", normalized);
    }

    match error {
        Some(err) => Err(invalid_input(err.to_string())),
        None => Ok(()),
    }
}

pub fn validate(json: bool, args: ValidateArgs) -> Result<()> {
    let mut errors = validate_draft(
        args.name.as_deref().unwrap_or_default(),
        args.phone.as_deref().unwrap_or_default(),
    );
    if args.name.is_none() {
        errors.name = None;
    }
    if args.phone.is_none() {
        errors.phone = None;
    }

    if json {
        print_json(&errors)?;
    } else {
        if args.name.is_some() {
            println!("name: {}", errors.name.as_deref().unwrap_or("ok"));
        }
        if let Some(phone) = &args.phone {
            match &errors.phone {
                Some(err) => println!("phone: {}", err),
                None => println!("phone: ok ({})", normalize_phone(phone)),
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(invalid_input("validation failed"))
    }
}
