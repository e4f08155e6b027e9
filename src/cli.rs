use std::io;

use chrono::NaiveDate;
use serde::Serialize;

use crate::combinatorics::{
    odds_of_at_least, prize_tiers, probability_of, BonusCondition, LotteryConfiguration,
    MatchQuery, PrizeTier, ProbabilityResult,
};
use crate::config::{load_games, resolve_game, workers_from_env, GamePreset};
use crate::history::{
    ball_stats, load_history_csv, recurring_subsequences, suggest_rows, HISTORY_DATE_FORMAT,
};
use crate::parallel::WorkerPool;
use crate::simulation::{entropy_seed, simulate, SimulationConfig};

const USAGE: &str = "usage: lotto-odds <odds|table|simulate|suggest|patterns|games>";
const DEFAULT_DRAWS: usize = 1_000_000;
const DEFAULT_SUGGEST_GAME: &str = "oz-lotto";
const DEFAULT_PATTERN_LENGTH: usize = 2;
const DEFAULT_PATTERN_TOP: usize = 10;

/// Flags that consume the following argument.
const VALUE_FLAGS: [&str; 4] = ["--at-least", "--workers", "--as-of", "--top"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Odds,
    Table,
    Simulate,
    Suggest,
    Patterns,
    Games,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("odds") => Some(Command::Odds),
        Some("table") => Some(Command::Table),
        Some("simulate") => Some(Command::Simulate),
        Some("suggest") => Some(Command::Suggest),
        Some("patterns") => Some(Command::Patterns),
        Some("games") => Some(Command::Games),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    let Some(command) = parse_command(args) else {
        eprintln!("{USAGE}");
        return 2;
    };
    let games = match load_games() {
        Ok(games) => games,
        Err(err) => {
            eprintln!("error: {err}");
            return 1;
        }
    };
    let positional = positional_args(&args[2..]);

    match command {
        Command::Odds => handle_odds(args, &positional, &games),
        Command::Table => handle_table(args, &positional, &games),
        Command::Simulate => handle_simulate(args, &positional, &games),
        Command::Suggest => handle_suggest(args, &positional, &games),
        Command::Patterns => handle_patterns(args, &positional),
        Command::Games => handle_games(&games),
    }
}

#[derive(Debug, Serialize)]
struct OddsOutput<'a> {
    game: &'a LotteryConfiguration,
    query: &'a MatchQuery,
    probability: &'a ProbabilityResult,
}

fn handle_odds(args: &[String], positional: &[&str], games: &[GamePreset]) -> i32 {
    let (Some(game), Some(raw_k)) = (positional.first(), positional.get(1)) else {
        eprintln!("usage: lotto-odds odds <game> <k> [none|excluding-bonus|including-bonus] [--json]");
        return 2;
    };
    let Some(k) = parse_arg::<u32>(raw_k, "k") else {
        return 2;
    };
    let condition = match positional.get(2).map(|raw| raw.parse::<BonusCondition>()) {
        None => BonusCondition::None,
        Some(Ok(condition)) => condition,
        Some(Err(err)) => {
            eprintln!("{err}");
            return 2;
        }
    };
    let config = match resolve_game(game, games) {
        Ok(config) => config,
        Err(err) => return report_error(err),
    };

    let query = MatchQuery::new(k, condition);
    let result = match probability_of(&config, &query) {
        Ok(result) => result,
        Err(err) => return report_error(err),
    };

    if has_flag(args, "--json") {
        print_json(&OddsOutput {
            game: &config,
            query: &query,
            probability: &result,
        })
    } else {
        println!("{config}, match {query}: {result}");
        0
    }
}

#[derive(Debug, Serialize)]
struct TableOutput<'a> {
    game: &'a LotteryConfiguration,
    tiers: &'a [PrizeTier],
    #[serde(skip_serializing_if = "Option::is_none")]
    at_least: Option<AtLeastOutput>,
}

#[derive(Debug, Serialize)]
struct AtLeastOutput {
    k: u32,
    probability: ProbabilityResult,
}

fn handle_table(args: &[String], positional: &[&str], games: &[GamePreset]) -> i32 {
    let Some(game) = positional.first() else {
        eprintln!("usage: lotto-odds table <game> [--json|--csv] [--at-least K]");
        return 2;
    };
    let config = match resolve_game(game, games) {
        Ok(config) => config,
        Err(err) => return report_error(err),
    };
    let tiers = match prize_tiers(&config) {
        Ok(tiers) => tiers,
        Err(err) => return report_error(err),
    };
    let at_least = match flag_value(args, "--at-least") {
        None => None,
        Some(raw) => {
            let Some(k) = parse_arg::<u32>(raw, "at-least") else {
                return 2;
            };
            match odds_of_at_least(&config, k) {
                Ok(probability) => Some(AtLeastOutput { k, probability }),
                Err(err) => return report_error(err),
            }
        }
    };

    if has_flag(args, "--json") {
        return print_json(&TableOutput {
            game: &config,
            tiers: &tiers,
            at_least,
        });
    }
    if has_flag(args, "--csv") {
        return match write_tiers_csv(&tiers, io::stdout()) {
            Ok(()) => 0,
            Err(err) => report_error(err),
        };
    }

    println!("{config}: {} tickets", tiers.first().map_or(0, |t| t.probability.total));
    println!("{:<10}\t{:>14}\tprobability", "match", "favorable");
    for tier in &tiers {
        println!(
            "{:<10}\t{:>14}\t{}",
            tier.query.to_string(),
            tier.probability.favorable,
            tier.probability
        );
    }
    if let Some(at_least) = at_least {
        println!("at least {}: {}", at_least.k, at_least.probability);
    }
    0
}

/// One CSV row per tier: `k,bonus,favorable,total,reduced,one_in`.
pub fn write_tiers_csv<W: io::Write>(tiers: &[PrizeTier], out: W) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["k", "bonus", "favorable", "total", "reduced", "one_in"])?;
    for tier in tiers {
        let probability = &tier.probability;
        writer.write_record([
            tier.query.k.to_string(),
            tier.query.bonus_condition.to_string(),
            probability.favorable.to_string(),
            probability.total.to_string(),
            probability.reduced.to_string(),
            probability.one_in.map(|n| n.to_string()).unwrap_or_default(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn handle_simulate(args: &[String], positional: &[&str], games: &[GamePreset]) -> i32 {
    let Some(game) = positional.first() else {
        eprintln!("usage: lotto-odds simulate <game> [draws] [seed] [--workers N]");
        return 2;
    };
    let config = match resolve_game(game, games) {
        Ok(config) => config,
        Err(err) => return report_error(err),
    };
    let draws = parse_or_default(positional.get(1).copied(), "draws", DEFAULT_DRAWS);
    let seed = match positional.get(2) {
        Some(raw) => match parse_arg::<u64>(raw, "seed") {
            Some(seed) => seed,
            None => return 2,
        },
        None => match entropy_seed() {
            Ok(seed) => seed,
            Err(err) => return report_error(err),
        },
    };
    let workers = parse_or_default(flag_value(args, "--workers"), "workers", workers_from_env());

    match simulate(
        &config,
        SimulationConfig { draws, seed },
        &WorkerPool::with_workers(workers),
    ) {
        Ok(report) => print_json(&report),
        Err(err) => report_error(err),
    }
}

fn handle_suggest(args: &[String], positional: &[&str], games: &[GamePreset]) -> i32 {
    let Some(path) = positional.first() else {
        eprintln!("usage: lotto-odds suggest <history.csv> [game] [--as-of YYYY-MM-DD] [--json]");
        return 2;
    };
    let game = positional.get(1).copied().unwrap_or(DEFAULT_SUGGEST_GAME);
    let config = match resolve_game(game, games) {
        Ok(config) => config,
        Err(err) => return report_error(err),
    };
    let as_of = match flag_value(args, "--as-of") {
        Some(raw) => match NaiveDate::parse_from_str(raw, HISTORY_DATE_FORMAT) {
            Ok(date) => date,
            Err(_) => {
                eprintln!("invalid as-of date '{raw}' (expected YYYY-MM-DD)");
                return 2;
            }
        },
        None => chrono::Utc::now().date_naive(),
    };
    let history = match load_history_csv(path) {
        Ok(history) => history,
        Err(err) => return report_error(err),
    };

    let stats = ball_stats(&history, config.pool_size());
    let rows = suggest_rows(&stats, config.draw_size() as usize, as_of);
    if rows.is_empty() {
        eprintln!("no rows could be generated from {} draw(s)", history.len());
        return 1;
    }
    if has_flag(args, "--json") {
        return print_json(&rows);
    }
    for row in &rows {
        let numbers: Vec<String> = row.numbers.iter().map(u32::to_string).collect();
        println!("{:<22}\t{}", row.strategy.label(), numbers.join(" "));
    }
    0
}

fn handle_patterns(args: &[String], positional: &[&str]) -> i32 {
    let Some(path) = positional.first() else {
        eprintln!("usage: lotto-odds patterns <history.csv> [length] [--top N]");
        return 2;
    };
    let length = parse_or_default(positional.get(1).copied(), "length", DEFAULT_PATTERN_LENGTH);
    let top = parse_or_default(flag_value(args, "--top"), "top", DEFAULT_PATTERN_TOP);
    let history = match load_history_csv(path) {
        Ok(history) => history,
        Err(err) => return report_error(err),
    };

    println!("count\tnumbers");
    for run in recurring_subsequences(&history, length).into_iter().take(top) {
        let numbers: Vec<String> = run.numbers.iter().map(u32::to_string).collect();
        println!("{}\t{}", run.count, numbers.join(" "));
    }
    0
}

fn handle_games(games: &[GamePreset]) -> i32 {
    for preset in games {
        match preset.configuration() {
            Ok(config) => println!("{}\t{config}", preset.name),
            Err(err) => println!("{}\tinvalid: {err}", preset.name),
        }
    }
    0
}

fn report_error(err: impl std::fmt::Display) -> i32 {
    eprintln!("error: {err}");
    1
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize output: {err}");
            1
        }
    }
}

/// Arguments after the command, minus flags and the values they consume.
fn positional_args(rest: &[String]) -> Vec<&str> {
    let mut positional = Vec::new();
    let mut iter = rest.iter();
    while let Some(arg) = iter.next() {
        if VALUE_FLAGS.contains(&arg.as_str()) {
            iter.next();
        } else if !arg.starts_with("--") {
            positional.push(arg.as_str());
        }
    }
    positional
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|arg| arg == flag)
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|index| args.get(index + 1))
        .map(String::as_str)
}

fn parse_arg<T: std::str::FromStr>(raw: &str, name: &str) -> Option<T> {
    let parsed = raw.parse::<T>().ok();
    if parsed.is_none() {
        eprintln!("invalid {name} '{raw}'");
    }
    parsed
}

fn parse_or_default<T>(raw: Option<&str>, name: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    raw.and_then(|value| value.parse::<T>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}
