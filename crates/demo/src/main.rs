//! demo - builds each symbol table from the sample data and prints it
//!
//! Usage:
//!   cargo run -p demo -- [--table <sequential|binary|red-black|all>] [--log-level <level>]

use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use symbol_table::{
    BinarySearchTable, OrderedSymbolTable, RedBlackTree, SequentialSearchTable, SymbolTable,
    SymbolTableRemove,
};

#[derive(Parser)]
#[command(name = "demo")]
#[command(about = "Walks each symbol table through its sample data")]
struct Cli {
    /// Which table to run
    #[arg(long, value_enum, default_value_t = Table::All)]
    table: Table,

    /// Log verbosity written to stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Table {
    Sequential,
    Binary,
    RedBlack,
    All,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

const FRUITS: [(i32, &str); 4] = [(7, "date"), (5, "cherry"), (3, "banana"), (1, "apple")];

fn sequential_search<W: Write>(out: &mut W) -> io::Result<()> {
    info!("sequential search symbol table");
    let mut table = SequentialSearchTable::new();
    table.put("apple", 1);
    table.put("banana", 2);
    table.put("cherry", 3);
    table.print(out)?;

    if let Some(count) = table.get(&"banana") {
        writeln!(out, "banana: {count}")?;
    }

    table.remove(&"banana");
    table.print(out)
}

fn binary_search<W: Write>(out: &mut W) -> io::Result<()> {
    info!("binary search symbol table");
    let mut table = BinarySearchTable::new();
    for (key, value) in FRUITS {
        table.put(key, value);
    }
    table.print(out)?;

    let or_missing = |key: Option<&i32>| key.copied().unwrap_or(-1);
    writeln!(out, "min: {}", or_missing(table.min()))?;
    writeln!(out, "max: {}", or_missing(table.max()))?;
    writeln!(out, "select(2): {}", or_missing(table.select(2)))?;
    writeln!(out, "ceiling(6): {}", or_missing(table.ceiling(&6)))?;
    writeln!(out, "floor(6): {}", or_missing(table.floor(&6)))?;
    writeln!(out, "contains(3): {}", table.contains(&3))?;
    writeln!(out, "contains(4): {}", table.contains(&4))?;

    table.remove(&3);
    table.print(out)
}

fn red_black<W: Write>(out: &mut W) -> io::Result<()> {
    info!("red-black BST");
    let mut tree = RedBlackTree::new();
    for (key, value) in FRUITS {
        tree.put(key, value);
    }
    writeln!(out, "Red-Black BST")?;
    tree.print(out)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    TermLogger::init(
        cli.log_level.into(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let all = cli.table == Table::All;
    if all || cli.table == Table::Sequential {
        sequential_search(&mut out)?;
    }
    if all || cli.table == Table::Binary {
        binary_search(&mut out)?;
    }
    if all || cli.table == Table::RedBlack {
        red_black(&mut out)?;
    }
    out.flush()?;
    Ok(())
}
