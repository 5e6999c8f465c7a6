mod logging;

use std::process;

use clap::{Parser, Subcommand};

use ganzhi_almanac::{Almanac, AlmanacConfig};
use ganzhi_calendar::LeapSplitMode;
use ganzhi_ephem::AnalyticEphemeris;
use ganzhi_pillars::{DayBoundaryPolicy, ZiHourPolicy, void_branches, day_pillar};
use ganzhi_time::CivilDateTime;

#[derive(Parser)]
#[command(name = "ganzhi", about = "Lunisolar calendar and four-pillars CLI")]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars for a civil date/time
    Pillars {
        /// Civil datetime (YYYY-MM-DDThh:mm:ss)
        #[arg(long)]
        date: String,
        /// UTC offset in hours (e.g. 9 for JST)
        #[arg(long, default_value_t = 9.0)]
        offset: f64,
        /// Geographic longitude in degrees east, for true-solar-time hours
        #[arg(long)]
        longitude: Option<f64>,
        /// Roll the day pillar at midnight instead of 23:00
        #[arg(long)]
        midnight_boundary: bool,
        /// Anchor 23:00-24:00 on the current day's stem (early zi)
        #[arg(long)]
        early_zi: bool,
    },
    /// Lunar calendar date for a civil date/time
    LunarDate {
        /// Civil datetime (YYYY-MM-DDThh:mm:ss)
        #[arg(long)]
        date: String,
        /// UTC offset in hours
        #[arg(long, default_value_t = 9.0)]
        offset: f64,
        /// Leap-month split mode: A, B or C
        #[arg(long, default_value = "A")]
        leap_mode: String,
    },
    /// The 24 solar terms of a civil year
    SolarTerms {
        year: i32,
    },
    /// New moons of a civil year
    NewMoons {
        year: i32,
    },
    /// Void (kongwang) branches of a civil date's day pillar
    Void {
        /// Civil datetime (YYYY-MM-DDThh:mm:ss)
        #[arg(long)]
        date: String,
        /// UTC offset in hours
        #[arg(long, default_value_t = 9.0)]
        offset: f64,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Pillars {
            date,
            offset,
            longitude,
            midnight_boundary,
            early_zi,
        } => {
            let civil = parse_civil(&date, offset)?;
            let config = AlmanacConfig {
                day_boundary: if midnight_boundary {
                    DayBoundaryPolicy::Midnight
                } else {
                    DayBoundaryPolicy::LateZi
                },
                zi_hour: if early_zi {
                    ZiHourPolicy::Early
                } else {
                    ZiHourPolicy::Late
                },
                longitude_deg: longitude,
                ..AlmanacConfig::default()
            };
            let almanac = Almanac::new(AnalyticEphemeris::new(), config)?;
            let pillars = almanac.four_pillars(&civil)?;
            println!("year  : {} ({})", pillars.year, pillars.year.name());
            println!("month : {} ({})", pillars.month, pillars.month.name());
            println!("day   : {} ({})", pillars.day, pillars.day.name());
            println!("hour  : {} ({})", pillars.hour, pillars.hour.name());
        }
        Commands::LunarDate {
            date,
            offset,
            leap_mode,
        } => {
            let civil = parse_civil(&date, offset)?;
            let config = AlmanacConfig {
                leap_split: Some(parse_leap_mode(&leap_mode)?),
                ..AlmanacConfig::default()
            };
            let almanac = Almanac::new(AnalyticEphemeris::new(), config)?;
            let lunar = almanac.lunar_date(&civil)?;
            println!("{lunar}");
        }
        Commands::SolarTerms { year } => {
            let almanac = Almanac::new(AnalyticEphemeris::new(), AlmanacConfig::default())?;
            for event in almanac.solar_terms(year)?.iter() {
                let utc = CivilDateTime::from_jd_utc(event.jd_ut, 0.0);
                println!(
                    "{:<12} {} {:>5.1}°  {}",
                    event.term.name(),
                    event.term.chinese(),
                    event.term.target_longitude_deg(),
                    utc
                );
            }
        }
        Commands::NewMoons { year } => {
            let almanac = Almanac::new(AnalyticEphemeris::new(), AlmanacConfig::default())?;
            let lunisolar = almanac.lunisolar_year(year)?;
            for moon in &lunisolar.new_moons {
                println!("{}", CivilDateTime::from_jd_utc(moon.jd_ut, 0.0));
            }
        }
        Commands::Void { date, offset } => {
            let civil = parse_civil(&date, offset)?;
            let day = day_pillar(&civil, DayBoundaryPolicy::LateZi);
            let (v1, v2) = void_branches(day);
            println!(
                "day {} voids {}{} ({}, {})",
                day,
                v1.chinese(),
                v2.chinese(),
                v1.name(),
                v2.name()
            );
        }
    }
    Ok(())
}

fn parse_civil(input: &str, offset: f64) -> Result<CivilDateTime, Box<dyn std::error::Error>> {
    let (date_part, time_part) = match input.split_once('T') {
        Some(parts) => parts,
        None => (input, "00:00:00"),
    };

    let mut date_fields = date_part.splitn(3, '-');
    let year: i32 = next_field(&mut date_fields, "year")?.parse()?;
    let month: u32 = next_field(&mut date_fields, "month")?.parse()?;
    let day: u32 = next_field(&mut date_fields, "day")?.parse()?;

    let mut time_fields = time_part.splitn(3, ':');
    let hour: u32 = next_field(&mut time_fields, "hour")?.parse()?;
    let minute: u32 = next_field(&mut time_fields, "minute")?.parse()?;
    let second: f64 = match time_fields.next() {
        Some(s) => s.parse()?,
        None => 0.0,
    };

    Ok(CivilDateTime::new(year, month, day, hour, minute, second, offset)?)
}

fn next_field<'a>(
    iter: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<&'a str, String> {
    iter.next().ok_or_else(|| format!("missing {name} field"))
}

fn parse_leap_mode(input: &str) -> Result<LeapSplitMode, String> {
    match input {
        "A" | "a" => Ok(LeapSplitMode::A),
        "B" | "b" => Ok(LeapSplitMode::B),
        "C" | "c" => Ok(LeapSplitMode::C),
        other => Err(format!("unknown leap mode '{other}' (expected A, B or C)")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_datetime() {
        let civil = parse_civil("1992-02-17T17:18:00", 9.0).unwrap();
        assert_eq!((civil.year, civil.month, civil.day), (1992, 2, 17));
        assert_eq!((civil.hour, civil.minute), (17, 18));
    }

    #[test]
    fn parse_date_only_defaults_midnight() {
        let civil = parse_civil("2024-01-01", 0.0).unwrap();
        assert_eq!((civil.hour, civil.minute), (0, 0));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_civil("2024-13-01", 0.0).is_err());
        assert!(parse_civil("not-a-date", 0.0).is_err());
        assert!(parse_civil("2024", 0.0).is_err());
    }

    #[test]
    fn leap_mode_parsing() {
        assert_eq!(parse_leap_mode("A").unwrap(), LeapSplitMode::A);
        assert_eq!(parse_leap_mode("b").unwrap(), LeapSplitMode::B);
        assert!(parse_leap_mode("x").is_err());
    }
}
