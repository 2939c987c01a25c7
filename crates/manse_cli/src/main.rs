use clap::{Parser, Subcommand};
use manse_core::LunarSolarConverter;
use manse_ganji::{chinese_gapja_string, gapja_string};

#[derive(Parser)]
#[command(name = "manse", about = "Korean lunisolar calendar CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a solar (Gregorian) date to the lunar calendar
    ToLunar {
        /// Solar year (1000-2050)
        year: i32,
        /// Solar month (1-12)
        month: u32,
        /// Solar day
        day: u32,
    },
    /// Convert a lunar date to the solar calendar
    ToSolar {
        /// Lunar year (1000-2050)
        year: i32,
        /// Lunar month (1-12)
        month: u32,
        /// Lunar day
        day: u32,
        /// Address the intercalary occurrence of the month
        #[arg(long)]
        leap: bool,
    },
    /// Sexagenary (gapja) designation of a solar date
    Gapja {
        /// Solar year (1000-2050)
        year: i32,
        /// Solar month (1-12)
        month: u32,
        /// Solar day
        day: u32,
        /// Render with hanja glyphs
        #[arg(long)]
        hanja: bool,
    },
    /// Today's lunar date and gapja
    Today,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::ToLunar { year, month, day } => {
            let conv = converter_from_solar(year, month, day);
            println!("{}", conv.lunar_iso_format());
        }
        Commands::ToSolar { year, month, day, leap } => {
            let mut conv = LunarSolarConverter::new();
            if !conv.set_lunar_date(year, month, day, leap) {
                eprintln!("Invalid lunar date: {year:04}-{month:02}-{day:02} (leap: {leap})");
                std::process::exit(1);
            }
            println!("{}", conv.solar_iso_format());
        }
        Commands::Gapja { year, month, day, hanja } => {
            let conv = converter_from_solar(year, month, day);
            let lunar = conv.lunar_date().unwrap_or_else(|| {
                eprintln!("No lunar date set");
                std::process::exit(1);
            });
            if hanja {
                println!("{}", chinese_gapja_string(lunar));
            } else {
                println!("{}", gapja_string(lunar));
            }
        }
        Commands::Today => {
            let (solar, lunar) = manse_chrono::today().unwrap_or_else(|| {
                eprintln!("Today is outside the 1000-2050 span");
                std::process::exit(1);
            });
            println!("solar: {solar}");
            println!("lunar: {lunar}");
            println!("gapja: {}", gapja_string(lunar));
        }
    }
}

fn converter_from_solar(year: i32, month: u32, day: u32) -> LunarSolarConverter {
    let mut conv = LunarSolarConverter::new();
    if !conv.set_solar_date(year, month, day) {
        eprintln!("Invalid solar date: {year:04}-{month:02}-{day:02}");
        std::process::exit(1);
    }
    conv
}
