use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use std::env;

use numerology_engine::{birth_profile, daily_numbers, meaning_for, Locale};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: numerology-engine <name> <birth-date YYYY-MM-DD> [locale] [target-date YYYY-MM-DD]");
        eprintln!("Example: numerology-engine \"Ada Lovelace\" 1815-12-10 en 2026-08-29");
        std::process::exit(1);
    }

    let name = &args[1];
    let birth = parse_date(&args[2]).context("Invalid birth date")?;
    let locale = args
        .get(3)
        .map(|code| Locale::from_code(code))
        .unwrap_or(Locale::En);
    let target = match args.get(4) {
        Some(raw) => parse_date(raw).context("Invalid target date")?,
        None => Local::now().date_naive(),
    };

    println!("🔮 Numerology Engine v{}", numerology_engine::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("👤 {} (born {})", name, birth);
    println!("📅 Target date: {} | Locale: {}\n", target, locale.code());

    let profile = birth_profile(name, birth.year() as u32, birth.month(), birth.day());
    let daily = daily_numbers(
        birth.month(),
        birth.day(),
        target.year() as u32,
        target.month(),
        target.day(),
    );

    // Meanings ride along with the numbers, null where a number has none
    // (e.g. the 0 a digit-only name produces)
    let output = serde_json::json!({
        "profile": profile,
        "daily": daily,
        "meanings": {
            "lifePath": meaning_for(profile.life_path, locale).ok(),
            "birthday": meaning_for(profile.birthday, locale).ok(),
            "expression": meaning_for(profile.expression, locale).ok(),
            "soulUrge": meaning_for(profile.soul_urge, locale).ok(),
            "personality": meaning_for(profile.personality, locale).ok(),
            "personalDay": meaning_for(daily.personal_day, locale).ok(),
            "universalDay": meaning_for(daily.universal_day, locale).ok(),
        },
    });

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("Expected YYYY-MM-DD, got: {}", raw))
}
