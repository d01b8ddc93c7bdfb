//! Command handlers

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::output::{self, ConsoleNotifier};
use carlot_domain::repository::CatalogRepository;
use carlot_domain::service::{distinct_makes, filter_catalog, CatalogBounds, Criteria};
use carlot_store::CatalogStore;
use carlot_types::{Error, NewCar, OutputFormat, Result};
use std::path::PathBuf;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    // CLI args override config values
    let output_format = cli.format.unwrap_or(config.output_format);
    let store_dir = match cli.data_dir {
        Some(ref dir) => dir.clone(),
        None => config.data_dir()?,
    };

    match cli.command {
        Commands::Browse {
            search,
            make,
            min_price,
            max_price,
            min_year,
            max_year,
            limit,
        } => {
            let store = open_store(store_dir)?;
            cmd_browse(
                &store,
                search,
                make,
                min_price,
                max_price,
                min_year,
                max_year,
                limit,
                output_format,
            )
        }

        Commands::Makes => {
            let store = open_store(store_dir)?;
            let makes = distinct_makes(&store.find_available()?);
            if output_format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&makes)?);
            } else {
                for make in makes {
                    println!("{}", make);
                }
            }
            Ok(())
        }

        Commands::Show { id } => {
            let store = open_store(store_dir)?;
            cmd_show(&store, &id, output_format)
        }

        Commands::Buy { id, buyer } => {
            let store = open_store(store_dir)?;
            let buyer = resolve_buyer(buyer, &config)?;
            store.purchase(&id, &buyer)?;
            Ok(())
        }

        Commands::Purchases { buyer } => {
            let store = open_store(store_dir)?;
            let buyer = resolve_buyer(buyer, &config)?;
            let purchases = store.find_purchased_by(&buyer)?;
            let refs: Vec<_> = purchases.iter().collect();
            output::output_car_list(output_format, &refs)
        }

        Commands::Inventory => {
            let store = open_store(store_dir)?;
            let all = store.find_all()?;
            let refs: Vec<_> = all.iter().collect();
            output::output_car_list(output_format, &refs)
        }

        Commands::Add {
            make,
            model,
            year,
            price,
            description,
            image_url,
            features,
        } => {
            let store = open_store(store_dir)?;
            let draft = NewCar::new(make, model, year, price)
                .with_description(description.unwrap_or_default())
                .with_image_url(image_url.unwrap_or_default())
                .with_features(features);
            let car = store.add(draft)?;
            println!("New listing id: {}", car.id);
            Ok(())
        }

        Commands::Edit {
            id,
            make,
            model,
            year,
            price,
            description,
            image_url,
            features,
            sold,
            buyer,
        } => {
            let store = open_store(store_dir)?;
            cmd_edit(
                &store, &id, make, model, year, price, description, image_url, features, sold,
                buyer,
            )
        }

        Commands::Remove { id } => {
            let store = open_store(store_dir)?;
            store.remove(&id)?;
            Ok(())
        }

        Commands::Login { user_id } => cmd_login(config, user_id),

        Commands::Logout => cmd_logout(config),

        Commands::Whoami => {
            match config.current_user {
                Some(ref user) => println!("{}", user),
                None => println!("Not logged in"),
            }
            Ok(())
        }

        Commands::Config {
            show,
            set_format,
            set_data_dir,
            reset,
        } => cmd_config(show, set_format, set_data_dir, reset),
    }
}

fn open_store(store_dir: PathBuf) -> Result<CatalogStore> {
    Ok(CatalogStore::open(store_dir)?.with_notifier(Box::new(ConsoleNotifier)))
}

/// Buyer id from the flag, falling back to the remembered session user
fn resolve_buyer(buyer: Option<String>, config: &Config) -> Result<String> {
    buyer
        .or_else(|| config.current_user.clone())
        .ok_or(Error::NotLoggedIn)
}

fn cmd_browse(
    store: &CatalogStore,
    search: Option<String>,
    make: Option<String>,
    min_price: Option<u64>,
    max_price: Option<u64>,
    min_year: Option<i32>,
    max_year: Option<i32>,
    limit: Option<usize>,
    output_format: OutputFormat,
) -> Result<()> {
    let catalog = store.find_available()?;
    let bounds = CatalogBounds::of(&catalog);

    let mut criteria = Criteria::default();
    if let Some(search) = search {
        criteria = criteria.with_search(search);
    }
    if let Some(make) = make {
        criteria = criteria.with_make(make);
    }
    if min_price.is_some() || max_price.is_some() {
        // A missing bound falls back to the observed extreme, like the
        // browsing UI's slider initialization
        let lo = min_price.or(bounds.map(|b| b.price.min)).unwrap_or(0);
        let hi = max_price.or(bounds.map(|b| b.price.max)).unwrap_or(u64::MAX);
        criteria = criteria.with_price(lo, hi);
    }
    if min_year.is_some() || max_year.is_some() {
        let lo = min_year.or(bounds.map(|b| b.year.min)).unwrap_or(i32::MIN);
        let hi = max_year.or(bounds.map(|b| b.year.max)).unwrap_or(i32::MAX);
        criteria = criteria.with_year(lo, hi);
    }

    let mut filtered = filter_catalog(&catalog, &criteria);
    if let Some(limit) = limit {
        filtered.truncate(limit);
    }

    output::output_car_list(output_format, &filtered)
}

fn cmd_show(store: &CatalogStore, id: &str, output_format: OutputFormat) -> Result<()> {
    match store.find_by_id(id)? {
        Some(car) => output::output_car(output_format, &car),
        None => {
            eprintln!("Car not found!");
            Ok(())
        }
    }
}

fn cmd_edit(
    store: &CatalogStore,
    id: &str,
    make: Option<String>,
    model: Option<String>,
    year: Option<i32>,
    price: Option<u64>,
    description: Option<String>,
    image_url: Option<String>,
    features: Vec<String>,
    sold: Option<bool>,
    buyer: Option<String>,
) -> Result<()> {
    let mut car = match store.find_by_id(id)? {
        Some(car) => car,
        None => {
            eprintln!("Car not found!");
            return Ok(());
        }
    };

    if let Some(make) = make {
        car.make = make;
    }
    if let Some(model) = model {
        car.model = model;
    }
    if let Some(year) = year {
        car.year = year;
    }
    if let Some(price) = price {
        car.price = price;
    }
    if let Some(description) = description {
        car.description = description;
    }
    if let Some(image_url) = image_url {
        car.image_url = image_url;
    }
    if !features.is_empty() {
        car.features = features;
    }
    if let Some(sold) = sold {
        car.sold = sold;
        if !sold {
            car.buyer_id = None;
        }
    }
    if let Some(buyer) = buyer {
        car.sold = true;
        car.buyer_id = Some(buyer);
    }

    store.update(car)?;
    Ok(())
}

fn cmd_login(mut config: Config, user_id: String) -> Result<()> {
    config.current_user = Some(user_id);
    config.save()?;
    println!("Login successful!");
    Ok(())
}

fn cmd_logout(mut config: Config) -> Result<()> {
    config.current_user = None;
    config.save()?;
    println!("Logged out successfully!");
    Ok(())
}

fn cmd_config(
    show: bool,
    set_format: Option<OutputFormat>,
    set_data_dir: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    let mut config = Config::load()?;
    let mut changed = false;

    if reset {
        config = Config::default();
        changed = true;
    }
    if let Some(format) = set_format {
        config.output_format = format;
        changed = true;
    }
    if let Some(dir) = set_data_dir {
        config.data_dir = Some(dir);
        changed = true;
    }

    if changed {
        config.save()?;
    }

    if show || !changed {
        println!("Output format: {}", config.output_format);
        println!("Catalog dir:   {}", config.data_dir()?.display());
        println!(
            "Current user:  {}",
            config.current_user.as_deref().unwrap_or("(not logged in)")
        );
    }

    Ok(())
}
