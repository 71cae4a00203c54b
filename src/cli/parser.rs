use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for evtrack
/// CLI application to track EV charging sessions and vehicle expenses
#[derive(Parser)]
#[command(
    name = "evtrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track EV charging sessions, vehicle expenses and charging costs",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the data directory (config, guest store and database)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Account id: switches from the guest file to the SQLite store
    #[arg(global = true, long = "account")]
    pub account: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data directory, configuration and database
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (integrity checks, statistics)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table (account mode)
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a completed charging session
    Add {
        /// Battery percentage at the start of the charge
        #[arg(long = "start", value_name = "PCT")]
        start: i32,

        /// Battery percentage at the end of the charge
        #[arg(long = "end", value_name = "PCT")]
        end: Option<i32>,

        /// Cost of the session
        #[arg(long = "cost")]
        cost: Option<f64>,

        /// Energy delivered in kWh
        #[arg(long = "kwh")]
        kwh: Option<f64>,

        /// Charge type: fast or standard
        #[arg(long = "type", value_name = "TYPE")]
        charge_type: Option<String>,

        /// Odometer reading
        #[arg(long = "odometer")]
        odometer: Option<i64>,

        /// Session timestamp (YYYY-MM-DD or YYYY-MM-DDTHH:MM, default now)
        #[arg(long = "at", value_name = "WHEN")]
        at: Option<String>,

        /// Compute the cost from the profile's home rate
        #[arg(long = "home")]
        home: bool,
    },

    /// Begin an active charging session
    Start {
        /// Battery percentage at plug-in
        #[arg(long = "percent", value_name = "PCT")]
        percent: i32,

        /// Charge type: fast or standard
        #[arg(long = "type", value_name = "TYPE")]
        charge_type: Option<String>,

        /// Session timestamp (default now)
        #[arg(long = "at", value_name = "WHEN")]
        at: Option<String>,
    },

    /// Complete the active charging session
    Finish {
        /// Battery percentage at unplug
        #[arg(long = "end", value_name = "PCT")]
        end: Option<i32>,

        #[arg(long = "cost")]
        cost: Option<f64>,

        #[arg(long = "kwh")]
        kwh: Option<f64>,

        /// Compute the cost from the profile's home rate
        #[arg(long = "home")]
        home: bool,
    },

    /// Edit a charging session by id (or unique id prefix)
    Edit {
        id: String,

        #[arg(long = "start", value_name = "PCT")]
        start: Option<i32>,

        #[arg(long = "end", value_name = "PCT")]
        end: Option<i32>,

        #[arg(long = "cost")]
        cost: Option<f64>,

        #[arg(long = "kwh")]
        kwh: Option<f64>,

        #[arg(long = "type", value_name = "TYPE")]
        charge_type: Option<String>,

        #[arg(long = "odometer")]
        odometer: Option<i64>,

        #[arg(long = "at", value_name = "WHEN")]
        at: Option<String>,
    },

    /// Delete a charging session by id
    Del {
        id: String,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List charging sessions, newest first
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "type", value_name = "TYPE", help = "Filter by charge type")]
        charge_type: Option<String>,
    },

    /// Record a vehicle expense
    AddExpense {
        #[arg(long = "title")]
        title: String,

        #[arg(long = "amount", allow_negative_numbers = true)]
        amount: f64,

        /// Expense date (YYYY-MM-DD, default today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Category: maintenance, repair, insurance, tax, other
        #[arg(long = "category", default_value = "other")]
        category: String,

        #[arg(long = "odometer")]
        odometer: Option<i64>,

        #[arg(long = "location")]
        location: Option<String>,

        #[arg(long = "notes")]
        notes: Option<String>,
    },

    /// Delete a vehicle expense by id
    DelExpense {
        id: String,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List vehicle expenses, newest first
    Expenses {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Show derived statistics (monthly costs, type breakdown, totals)
    Stats {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Estimate yearly savings versus a gas car
    Roi {
        /// Price per fuel unit
        #[arg(long = "gas-price")]
        gas_price: f64,

        /// Gas car efficiency (distance per fuel unit)
        #[arg(long = "gas-mileage")]
        gas_mileage: f64,

        /// EV efficiency (distance per kWh)
        #[arg(long = "ev-mileage")]
        ev_mileage: f64,

        /// Distance driven per year
        #[arg(long = "distance")]
        distance: f64,
    },

    /// Show or update the vehicle profile
    Profile {
        /// Battery capacity in kWh
        #[arg(long = "capacity")]
        capacity: Option<f64>,

        /// Home electricity rate (cost per kWh)
        #[arg(long = "rate")]
        rate: Option<f64>,

        /// Preferred currency code (e.g. JPY, USD, EUR)
        #[arg(long = "currency")]
        currency: Option<String>,

        /// Fill the capacity from a catalogue model id
        #[arg(long = "ev", value_name = "MODEL_ID")]
        ev: Option<String>,

        #[arg(long = "list-evs", help = "List the built-in EV model catalogue")]
        list_evs: bool,

        #[arg(long = "print", help = "Print the current profile")]
        print: bool,
    },

    /// Export charging sessions
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
