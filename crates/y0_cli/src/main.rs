use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::process;

use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, Parser};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use y0_core::catalog::{self, ItemCategory};
use y0_core::hostess::{HOSTESSES, MAX_LEVEL};
use y0_core::{
    AddItem, CP_MAX, CoreError, CoreErrorCode, InsertError, MONEY_MAX, Pc, Savegame, SyncLedger,
};
use y0_render::{
    TextRenderOptions, format_number_with_commas, render_info_json, render_info_text,
    render_title,
};

const DART_IDS: [u16; 4] = [170, 171, 172, 173];
const FISHING_POLE_IDS: [u16; 6] = [1139, 1140, 1141, 1142, 1143, 1144];

#[derive(Debug, Parser)]
#[command(author, version, about = "Yakuza 0 savegame editor")]
#[command(group(ArgGroup::new("character").args(["current", "kiryu", "majima", "both"])))]
struct Cli {
    /// Savefile(s) to process
    #[arg(value_name = "FILENAME", required = true)]
    filenames: Vec<PathBuf>,

    /// Operate on the currently-active character (the default)
    #[arg(short = 'c', long)]
    current: bool,
    /// Operate on Kiryu only
    #[arg(short = 'k', long)]
    kiryu: bool,
    /// Operate on Majima only
    #[arg(short = 'm', long)]
    majima: bool,
    /// Operate on both characters
    #[arg(short = 'b', long)]
    both: bool,

    /// Show info about the specified savefiles
    #[arg(short = 'i', long)]
    info: bool,
    /// Print info as JSON instead of text
    #[arg(long, requires = "info")]
    json: bool,
    /// Only refresh remotecache.vdf for the specified files
    #[arg(short = 'r', long)]
    refresh: bool,

    /// Set the currently available money
    #[arg(long, allow_hyphen_values = true, conflicts_with = "money_max")]
    money: Option<i64>,
    /// Set available money to the maximum value
    #[arg(long = "money-max")]
    money_max: bool,
    /// Set the current CP
    #[arg(long, allow_hyphen_values = true)]
    cp: Option<i64>,

    /// Clear all inventory apart from Valuables, before any items are added
    #[arg(long = "clear-all-inventory")]
    clear_all_inventory: bool,
    /// Add all available darts
    #[arg(long = "add-darts")]
    add_darts: bool,
    /// Add all available fishing poles
    #[arg(long = "add-fishing-poles")]
    add_fishing_poles: bool,
    /// Add one of every weapon to the box (implies --box)
    #[arg(long = "add-all-weapons")]
    add_all_weapons: bool,
    /// Add one of every piece of gear to the box (implies --box)
    #[arg(long = "add-all-gear")]
    add_all_gear: bool,
    /// Add all Pocket Circuit parts to Kiryu, regardless of character selection
    #[arg(long = "add-all-pocket-circuit")]
    add_all_pocket_circuit: bool,
    /// Add all crafting materials at max quantity to Majima, regardless of character selection
    #[arg(long = "add-all-crafting")]
    add_all_crafting: bool,
    /// Item ID(s) to add; repeatable and/or comma-separated
    #[arg(long = "add-item-id", value_name = "IDS")]
    add_item_id: Vec<String>,
    /// Item name(s) to add; repeatable and/or comma-separated
    #[arg(long = "add-item-name", value_name = "NAMES")]
    add_item_name: Vec<String>,
    /// Store added items in the Item Box instead of inventory where possible
    #[arg(long = "box")]
    to_box: bool,
    /// Quantity for added items, where the item type and location allow it
    #[arg(long, allow_hyphen_values = true, conflicts_with = "qty_max")]
    qty: Option<i64>,
    /// Use the maximum allowed quantity for added items
    #[arg(long = "qty-max")]
    qty_max: bool,

    /// Cabaret hostess name(s) to update; repeatable and/or comma-separated
    #[arg(long = "hostess-name", value_name = "NAMES")]
    hostess_name: Vec<String>,
    /// Cabaret hostess id(s) to update (1-30); repeatable and/or comma-separated
    #[arg(long = "hostess-id", value_name = "IDS")]
    hostess_id: Vec<String>,
    /// Level to set the specified hostess(es) to
    #[arg(long, allow_hyphen_values = true)]
    level: Option<i64>,
    /// Total sales to set the specified hostess(es) to
    #[arg(long, allow_hyphen_values = true)]
    sales: Option<i64>,

    /// Show all available info
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharSelection {
    Current,
    Only(Pc),
    Both,
}

/// Everything the command line asked for, validated once up front.
#[derive(Debug)]
struct Plan {
    selection: CharSelection,
    info: bool,
    json: bool,
    refresh: bool,
    verbose: bool,
    money: Option<u64>,
    cp: Option<u32>,
    clear_inventory: bool,
    item_ids: Vec<u16>,
    item_names: Vec<String>,
    request: AddItem,
    hostess_ids: Vec<u8>,
    hostess_names: Vec<String>,
    level: Option<u8>,
    sales: Option<u32>,
    all_pocket_circuit: bool,
    all_crafting: bool,
}

impl Plan {
    fn from_cli(cli: &Cli) -> Self {
        let selection = if cli.kiryu {
            CharSelection::Only(Pc::Kiryu)
        } else if cli.majima {
            CharSelection::Only(Pc::Majima)
        } else if cli.both {
            CharSelection::Both
        } else {
            CharSelection::Current
        };

        let mut item_ids = Vec::new();
        for list in &cli.add_item_id {
            for part in list.split(',') {
                item_ids.push(parse_item_id(part));
            }
        }
        if cli.add_darts {
            item_ids.extend(DART_IDS);
        }
        if cli.add_fishing_poles {
            item_ids.extend(FISHING_POLE_IDS);
        }
        if cli.add_all_weapons {
            item_ids.extend(catalog::items_in(ItemCategory::Weapon).map(|item| item.id));
        }
        if cli.add_all_gear {
            item_ids.extend(catalog::items_in(ItemCategory::Gear).map(|item| item.id));
        }
        item_ids.sort_unstable();

        let mut hostess_ids = Vec::new();
        for list in &cli.hostess_id {
            for part in list.split(',') {
                hostess_ids.push(parse_hostess_id(part));
            }
        }
        hostess_ids.sort_unstable();

        let request = AddItem {
            quantity: cli.qty.map(|qty| qty.clamp(1, i64::from(u32::MAX)) as u32),
            max_quantity: cli.qty_max,
            to_box: cli.to_box || cli.add_all_weapons || cli.add_all_gear,
            ..AddItem::default()
        };

        let money = if cli.money_max {
            Some(MONEY_MAX)
        } else {
            cli.money.map(|money| money.clamp(0, MONEY_MAX as i64) as u64)
        };

        Self {
            selection,
            info: cli.info,
            json: cli.json,
            refresh: cli.refresh,
            verbose: cli.verbose,
            money,
            cp: cli.cp.map(|cp| cp.clamp(0, i64::from(CP_MAX)) as u32),
            clear_inventory: cli.clear_all_inventory,
            item_ids,
            item_names: split_names(&cli.add_item_name),
            request,
            hostess_ids,
            hostess_names: split_names(&cli.hostess_name),
            level: cli.level.map(|level| level.clamp(1, i64::from(MAX_LEVEL)) as u8),
            sales: cli.sales.map(|sales| sales.clamp(0, i64::from(u32::MAX)) as u32),
            all_pocket_circuit: cli.add_all_pocket_circuit,
            all_crafting: cli.add_all_crafting,
        }
    }

    fn characters(&self, save: &Savegame) -> Vec<Pc> {
        match self.selection {
            CharSelection::Both => Pc::ALL.to_vec(),
            CharSelection::Only(pc) => vec![pc],
            CharSelection::Current => match save.active_pc() {
                Some(pc) => vec![pc],
                None => {
                    warn!(
                        current = save.current_character(),
                        "active character not recognised, no character selected"
                    );
                    Vec::new()
                }
            },
        }
    }
}

fn usage_error(message: String) -> ! {
    Cli::command().error(ErrorKind::ValueValidation, message).exit()
}

fn parse_item_id(raw: &str) -> u16 {
    let raw = raw.trim();
    let value: i64 = raw
        .parse()
        .unwrap_or_else(|_| usage_error(format!("Item IDs must be integers ({raw} is invalid)")));
    if value < 1 {
        usage_error(format!("Item IDs must be positive ({raw} is invalid)"));
    }
    u16::try_from(value)
        .unwrap_or_else(|_| usage_error(format!("Item ID out of range ({raw} is invalid)")))
}

fn parse_hostess_id(raw: &str) -> u8 {
    let raw = raw.trim();
    let value: i64 = raw
        .parse()
        .unwrap_or_else(|_| usage_error(format!("Hostess IDs must be integers ({raw} is invalid)")));
    if value < 1 {
        usage_error(format!("Hostess IDs must be positive ({raw} is invalid)"));
    }
    if value > HOSTESSES.len() as i64 {
        usage_error(format!("Hostess ID out of range ({raw} is invalid)"));
    }
    value as u8
}

fn split_names(lists: &[String]) -> Vec<String> {
    lists
        .iter()
        .flat_map(|list| list.split(','))
        .map(|name| name.trim().to_string())
        .collect()
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Ledgers shared by the processed files, keyed by their path. `None` means
/// there is no ledger at that path.
#[derive(Default)]
struct Ledgers {
    by_path: BTreeMap<PathBuf, Option<SyncLedger>>,
    touched: BTreeSet<PathBuf>,
}

impl Ledgers {
    fn discover(filenames: &[PathBuf], failed: &mut bool) -> (Self, BTreeMap<PathBuf, PathBuf>) {
        let mut ledgers = Self::default();
        let mut mapping = BTreeMap::new();
        for filename in filenames {
            let ledger_path = match SyncLedger::locate_for(filename) {
                Ok(path) => path,
                Err(e) => {
                    eprintln!("ERROR: {e}");
                    *failed = true;
                    continue;
                }
            };
            if !ledgers.by_path.contains_key(&ledger_path) {
                let ledger = if ledger_path.exists() {
                    match SyncLedger::open(&ledger_path) {
                        Ok(ledger) => Some(ledger),
                        Err(e) => {
                            eprintln!("ERROR: {e}");
                            *failed = true;
                            None
                        }
                    }
                } else {
                    None
                };
                ledgers.by_path.insert(ledger_path.clone(), ledger);
            }
            mapping.insert(filename.clone(), ledger_path);
        }
        (ledgers, mapping)
    }

    fn resync(&mut self, ledger_path: &Path, save_path: &Path) -> Result<(), CoreError> {
        let Some(Some(ledger)) = self.by_path.get_mut(ledger_path) else {
            return Ok(());
        };
        let Some(filename) = save_path.file_name().and_then(|name| name.to_str()) else {
            return Ok(());
        };
        ledger.resync(filename)?;
        self.touched.insert(ledger_path.to_path_buf());
        Ok(())
    }

    fn write_touched(&self, failed: &mut bool) {
        for path in &self.touched {
            let Some(Some(ledger)) = self.by_path.get(path) else {
                continue;
            };
            match ledger.overwrite() {
                Ok(()) => println!("Updated {}\n", path.display()),
                Err(e) => {
                    eprintln!("ERROR: {e}");
                    *failed = true;
                }
            }
        }
    }
}

fn report_file_error(e: &CoreError) {
    match e.code() {
        CoreErrorCode::NotASavegame | CoreErrorCode::Corrupt => {
            eprintln!("ERROR: {e}, skipping file")
        }
        CoreErrorCode::Io | CoreErrorCode::LedgerFormat => eprintln!("ERROR: {e}"),
    }
}

fn report_insert(result: Result<impl std::fmt::Display, InsertError>) {
    match result {
        Ok(done) => println!(" - {done}"),
        Err(e) => println!(" - ERROR: {e}"),
    }
}

/// Apply the plan to one savegame. Returns whether the file should have its
/// ledger entry refreshed.
fn process_file(save: &mut Savegame, plan: &Plan) -> Result<bool, CoreError> {
    let chars = plan.characters(save);

    if !plan.json {
        print!("{}", render_title(save));
        println!();
    }

    if plan.info {
        if plan.json {
            match serde_json::to_string_pretty(&render_info_json(save, &chars)) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("Error rendering JSON output: {e}"),
            }
        } else {
            let options = TextRenderOptions {
                verbose: plan.verbose,
            };
            print!("{}", render_info_text(save, &chars, options));
        }
    }

    let mut done_updates = false;

    if let Some(money) = plan.money {
        for &pc in &chars {
            let stored = save.character_mut(pc).set_money(money)?;
            println!("Setting {pc} money to: {}", format_number_with_commas(stored));
        }
        done_updates = true;
    }

    if let Some(cp) = plan.cp {
        for &pc in &chars {
            let stored = save.character_mut(pc).set_cp(cp)?;
            println!("Setting {pc} CP to: {stored}");
        }
        done_updates = true;
    }

    if plan.clear_inventory {
        for &pc in &chars {
            println!("Clearing inventory for {pc}");
            save.character_mut(pc).clear_non_valuables(true, true)?;
        }
        done_updates = true;
    }

    if !plan.item_ids.is_empty() {
        for &pc in &chars {
            println!("Adding inventory IDs for {pc}");
            let mut character = save.character_mut(pc);
            for &item_id in &plan.item_ids {
                report_insert(character.add_item(item_id, &plan.request));
            }
        }
        done_updates = true;
    }

    if !plan.item_names.is_empty() {
        for &pc in &chars {
            println!("Adding inventory names for {pc}");
            let mut character = save.character_mut(pc);
            for name in &plan.item_names {
                report_insert(character.add_item_by_name(name, &plan.request));
            }
        }
        done_updates = true;
    }

    if !plan.hostess_ids.is_empty() {
        for &id in &plan.hostess_ids {
            report_insert(save.set_hostess(id, plan.level, plan.sales));
        }
        done_updates = true;
    }

    if !plan.hostess_names.is_empty() {
        for name in &plan.hostess_names {
            report_insert(save.set_hostess_by_name(name, plan.level, plan.sales));
        }
        done_updates = true;
    }

    if plan.all_pocket_circuit {
        println!("Adding all Pocket Circuit parts to Kiryu");
        let mut kiryu = save.character_mut(Pc::Kiryu);
        for item in catalog::items_in(ItemCategory::PocketCircuit) {
            report_insert(kiryu.add_item(item.id, &AddItem::default()));
        }
        done_updates = true;
    }

    if plan.all_crafting {
        println!("Adding all crafting ingredients to Majima");
        let mut majima = save.character_mut(Pc::Majima);
        for item in catalog::items_in(ItemCategory::Crafting) {
            report_insert(majima.add_item(item.id, &AddItem::default().max_quantity()));
        }
        done_updates = true;
    }

    if done_updates {
        println!("\nWriting updated savegame\n");
        save.overwrite()?;
    } else if plan.refresh {
        println!("Marking file as needing a remotecache.vdf refresh\n");
        done_updates = true;
    }

    Ok(done_updates)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let plan = Plan::from_cli(&cli);

    let mut failed = false;
    let (mut ledgers, mapping) = Ledgers::discover(&cli.filenames, &mut failed);
    if plan.verbose {
        println!("remotecache.vdf mappings found:");
        for (filename, ledger_path) in &mapping {
            if let Some(Some(_)) = ledgers.by_path.get(ledger_path) {
                println!("  {} -> {}", filename.display(), ledger_path.display());
            }
        }
        println!();
    }

    for filename in &cli.filenames {
        let mut save = match Savegame::open(filename) {
            Ok(save) => save,
            Err(e) => {
                report_file_error(&e);
                failed = true;
                continue;
            }
        };

        let needs_refresh = match process_file(&mut save, &plan) {
            Ok(needs_refresh) => needs_refresh,
            Err(e) => {
                report_file_error(&e);
                failed = true;
                continue;
            }
        };

        if needs_refresh
            && let Some(ledger_path) = mapping.get(filename)
            && let Err(e) = ledgers.resync(ledger_path, filename)
        {
            eprintln!("ERROR: {e}");
            failed = true;
        }
    }

    ledgers.write_touched(&mut failed);

    if failed {
        process::exit(1);
    }
}
