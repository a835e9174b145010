use std::{
    env,
    io::{self, Read},
    process,
};

use uuid::Uuid;

use cheque_core::{
    banks,
    cli::{output, wizard},
    config::ConfigManager,
    errors::ChequeError,
    form::{ChequeForm, ChequeFormState},
    init, layout, render,
    storage::{JsonStorage, RecordStore},
    words,
};

fn main() {
    init();

    if let Err(err) = run() {
        output::error(&err);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });

    match command.as_str() {
        "new" => {
            let config = ConfigManager::new()?.load()?;
            let form = wizard::run(&config)?;
            println!();
            println!("{}", render::preview(&form, &config));
            if wizard::confirm("Save this cheque for reuse?")? {
                let record = form.to_record()?;
                let storage = JsonStorage::new_default()?;
                let mut book = storage.load()?;
                let id = book.add(record);
                storage.save(&book)?;
                output::success(format!("Record saved successfully ({id})"));
            }
        }
        "words" => {
            let amount = args.next().unwrap_or_else(|| {
                print_usage();
                process::exit(1);
            });
            println!("{}", words::words_for(&amount));
        }
        "banks" => {
            for profile in banks::all_banks() {
                println!(
                    "{} ({}mm x {}mm)",
                    profile.display_name, profile.print_width_mm, profile.print_height_mm
                );
            }
        }
        "layout" => {
            let bank = args.next().unwrap_or_else(|| {
                print_usage();
                process::exit(1);
            });
            match layout::layout_for_bank(&bank) {
                Some(layout) => println!("{}", serde_json::to_string_pretty(&layout)?),
                None => report_unknown_bank(&bank),
            }
        }
        "stylesheet" => {
            let bank = args.next().unwrap_or_else(|| {
                print_usage();
                process::exit(1);
            });
            match layout::layout_for_bank(&bank) {
                Some(layout) => print!("{}", render::stylesheet(&layout)),
                None => report_unknown_bank(&bank),
            }
        }
        "save" => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            let state: ChequeFormState = serde_json::from_str(&buffer)?;
            let form = ChequeForm::from_state(state);
            let record = form.to_record()?;
            let storage = JsonStorage::new_default()?;
            let mut book = storage.load()?;
            let id = book.add(record);
            storage.save(&book)?;
            output::success(format!("Record saved successfully ({id})"));
        }
        "list" => {
            let config = ConfigManager::new()?.load()?;
            let storage = JsonStorage::new_default()?;
            let book = storage.load()?;
            if book.is_empty() {
                output::info("No saved cheques.");
            }
            for record in &book.records {
                println!(
                    "{}  {}  {} {}  {}  {}",
                    record.id,
                    record.payee,
                    config.currency,
                    render::format_figures(record.amount),
                    record.bank,
                    if record.memo.is_empty() {
                        "-"
                    } else {
                        record.memo.as_str()
                    }
                );
            }
        }
        "load" => {
            let id = parse_record_id(args.next())?;
            let storage = JsonStorage::new_default()?;
            let book = storage.load()?;
            let record = book
                .find(id)
                .ok_or_else(|| ChequeError::RecordNotFound(id.to_string()))?;
            let mut form = ChequeForm::new();
            form.load_record(record);
            println!("{}", serde_json::to_string_pretty(&form)?);
        }
        "delete" => {
            let id = parse_record_id(args.next())?;
            let storage = JsonStorage::new_default()?;
            let mut book = storage.load()?;
            if !book.remove(id) {
                return Err(ChequeError::RecordNotFound(id.to_string()).into());
            }
            storage.save(&book)?;
            output::success("Record deleted.");
        }
        "print" => {
            let id = parse_record_id(args.next())?;
            let config = ConfigManager::new()?.load()?;
            let storage = JsonStorage::new_default()?;
            let book = storage.load()?;
            let record = book
                .find(id)
                .ok_or_else(|| ChequeError::RecordNotFound(id.to_string()))?;
            let mut form = ChequeForm::new();
            form.load_record(record);
            form.state.validate_for_print()?;
            match layout::layout_for_bank(&form.state.bank) {
                Some(layout) => {
                    println!("{}", render::stylesheet(&layout));
                    print!("{}", render::print_document(&form, &config));
                }
                None => report_unknown_bank(&form.state.bank),
            }
        }
        "config" => match args.next().as_deref() {
            None => {
                let config = ConfigManager::new()?.load()?;
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            Some("set-currency") => {
                let code = args.next().unwrap_or_else(|| {
                    print_usage();
                    process::exit(1);
                });
                let manager = ConfigManager::new()?;
                let mut config = manager.load()?;
                config.currency = code.trim().to_uppercase();
                manager.save(&config)?;
                output::success(format!("Currency set to {}", config.currency));
            }
            Some(_) => {
                print_usage();
                process::exit(1);
            }
        },
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

/// Unknown banks mean no print positioning; say so instead of failing.
fn report_unknown_bank(bank: &str) {
    output::warning(format!("No print layout available for bank `{bank}`"));
    if let Some(suggestion) = banks::closest_bank(bank) {
        output::info(format!("Closest known bank: {}", suggestion.display_name));
    }
}

fn parse_record_id(arg: Option<String>) -> Result<Uuid, ChequeError> {
    let raw = arg.ok_or_else(|| ChequeError::InvalidInput("Record id required".into()))?;
    Uuid::parse_str(raw.trim())
        .map_err(|_| ChequeError::InvalidInput(format!("`{raw}` is not a record id")))
}

fn print_usage() {
    eprintln!(
        "Usage: cheque_core_cli <command>\n\
         Commands:\n  \
         new\n  \
         words <amount>\n  \
         banks\n  \
         layout <bank>\n  \
         stylesheet <bank>\n  \
         save < form.json\n  \
         list\n  \
         load <id>\n  \
         delete <id>\n  \
         print <id>\n  \
         config [set-currency <code>]"
    );
}
