use serde::Serialize;

use marblezero::config::Config;
use marblezero::history::HistoryLog;
use marblezero::output::{format_timestamp, print_json};
use marblezero_engine::engine::{self, Summary};
use marblezero_engine::{AchievementResult, Catalogue};

/// Which results `achievements` lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Show {
    All,
    Unlocked,
}

fn load_history() -> anyhow::Result<Vec<marblezero_engine::Event>> {
    let log = HistoryLog::open_default()?;
    tracing::debug!(path = %log.path().display(), "reading history");
    log.read_all()
}

pub fn cmd_achievements(show: Show, json: bool) -> anyhow::Result<i32> {
    let catalogue = Catalogue::builtin()?;
    let history = load_history()?;
    let results = catalogue.evaluate(&history);
    let shown: Vec<&AchievementResult<'_>> = results
        .iter()
        .filter(|r| show == Show::All || r.unlocked)
        .collect();

    if json {
        print_json(&shown);
        return Ok(0);
    }

    let summary = engine::summarize(&results);
    println!(
        "marblezero achievements: {}/{} unlocked",
        summary.unlocked, summary.total
    );
    for r in shown {
        print_result_line(r);
    }
    Ok(0)
}

pub fn cmd_latest(limit: Option<usize>, json: bool) -> anyhow::Result<i32> {
    let limit = match limit {
        Some(n) => n,
        None => Config::load_default()?.display.latest,
    };
    let catalogue = Catalogue::builtin()?;
    let history = load_history()?;
    let results = catalogue.evaluate(&history);
    let latest: Vec<_> = engine::latest(&results).into_iter().take(limit).collect();

    if json {
        print_json(&latest);
        return Ok(0);
    }
    if latest.is_empty() {
        eprintln!("[marblezero] nothing unlocked yet");
        return Ok(0);
    }
    for r in latest {
        print_result_line(r);
    }
    Ok(0)
}

#[derive(Serialize)]
struct StatusView<'r, 'a> {
    pet: Option<&'r str>,
    #[serde(flatten)]
    summary: Summary,
    events: usize,
    latest: Vec<&'r AchievementResult<'a>>,
}

pub fn cmd_status(json: bool) -> anyhow::Result<i32> {
    let config = Config::load_default()?;
    let catalogue = Catalogue::builtin()?;
    let history = load_history()?;
    let results = catalogue.evaluate(&history);
    let view = StatusView {
        pet: config.pet_name(),
        summary: engine::summarize(&results),
        events: history.len(),
        latest: engine::latest(&results)
            .into_iter()
            .take(config.display.latest)
            .collect(),
    };

    if json {
        print_json(&view);
        return Ok(0);
    }

    match view.pet {
        Some(name) => println!("pet:       {name}"),
        None => println!("pet:       (unnamed, try `marblezero pet NAME`)"),
    }
    println!(
        "unlocked:  {}/{}",
        view.summary.unlocked, view.summary.total
    );
    println!("commands:  {}", view.events);
    if !view.latest.is_empty() {
        println!("latest:");
        for r in view.latest {
            print_result_line(r);
        }
    }
    Ok(0)
}

pub fn cmd_catalogue(check: bool) -> anyhow::Result<i32> {
    let catalogue = Catalogue::builtin()?;

    if check {
        let warnings = catalogue.lint();
        for w in &warnings {
            eprintln!("[marblezero] warning: {w}");
        }
        if !warnings.is_empty() {
            return Ok(1);
        }
        println!("catalogue ok: {} achievements", catalogue.len());
        return Ok(0);
    }

    for rule in catalogue.rules() {
        let needs = rule
            .selector
            .required_count()
            .map_or_else(|| "always".to_string(), |n| format!("x{n}"));
        println!("  {:29}  {needs:>6}  {}", rule.name, rule.description);
    }
    Ok(0)
}

fn print_result_line(r: &AchievementResult<'_>) {
    let mark = if r.unlocked { "[x]" } else { "[ ]" };
    let when = r
        .awarded_at
        .as_ref()
        .map(format_timestamp)
        .unwrap_or_default();
    println!(
        "  {mark} {:29}  {when:16}  {}",
        r.rule.name, r.rule.description
    );
}
