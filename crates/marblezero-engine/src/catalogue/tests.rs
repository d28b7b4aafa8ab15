#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::Duration;

use super::*;
use crate::condition::Condition;
use crate::test_support::{at, event, history};

fn builtin() -> Catalogue {
    Catalogue::builtin().expect("embedded catalogue is valid")
}

fn unlocked(catalogue: &Catalogue, name: &str, history: &[Event]) -> bool {
    catalogue
        .get(name)
        .unwrap_or_else(|| unreachable!("no achievement named {name}"))
        .evaluate(history)
        .unlocked
}

fn repeat(raw: &str, n: usize) -> Vec<Event> {
    let start = at(10, 0);
    (0..n)
        .map(|i| event(raw, start + Duration::seconds(i64::try_from(i).unwrap())))
        .collect()
}

// --- builtin catalogue ---

#[test]
fn builtin_parses() {
    let c = builtin();
    assert_eq!(c.len(), 65);
    assert_eq!(c.rules()[0].name, "Name your pet");
    assert_eq!(c.rules()[0].selector, Selector::Always);
}

#[test]
fn builtin_has_no_lint_warnings() {
    assert!(builtin().lint().is_empty());
}

#[test]
fn builtin_empty_history_unlocks_only_name_your_pet() {
    let c = builtin();
    let results = c.evaluate(&[]);
    let unlocked: Vec<&str> = results
        .iter()
        .filter(|r| r.unlocked)
        .map(|r| r.rule.name.as_str())
        .collect();
    assert_eq!(unlocked, vec!["Name your pet"]);
}

#[test]
fn tiered_rules_award_on_the_literal_occurrence() {
    let c = builtin();
    let fifty = repeat("go build", 50);
    assert!(unlocked(&c, "Gopher", &fifty));
    assert!(!unlocked(&c, "Go-go-gadget!", &fifty));

    let fifty_one = repeat("go build", 51);
    let rule = c.get("Go-go-gadget!").unwrap();
    assert_eq!(rule.selector.required_count(), Some(51));
    assert_eq!(
        rule.evaluate(&fifty_one).awarded_at,
        Some(fifty_one[50].timestamp)
    );
}

#[test]
fn pseudocoder_needs_a_second_python_run() {
    let c = builtin();
    assert!(!unlocked(&c, "Psuedocoder", &history(&["python3 app.py"])));
    assert!(unlocked(
        &c,
        "Psuedocoder",
        &history(&["python3 app.py", "python script.py"])
    ));
}

#[test]
fn any_rules_count_every_alternative() {
    let c = builtin();
    assert!(unlocked(&c, "Getting Rusty", &history(&["rustc main.rs"])));
    assert!(unlocked(&c, "Getting Rusty", &history(&["cargo build"])));
    assert!(unlocked(&c, "Found Waldo", &history(&["rg TODO"])));
    assert!(unlocked(&c, "npm i left-pad", &history(&["pnpm install"])));
}

#[test]
fn oncaller_needs_a_night_commit() {
    let c = builtin();
    assert!(!unlocked(&c, "Oncaller", &[event("git commit -m fix", at(1, 59))]));
    assert!(unlocked(&c, "Oncaller", &[event("git commit -m fix", at(3, 12))]));
    assert!(!unlocked(&c, "Oncaller", &[event("git push", at(3, 12))]));
}

#[test]
fn force_and_rm_rf_use_legacy_flags() {
    let c = builtin();
    assert!(unlocked(&c, "Use the --force", &history(&["git push --force"])));
    assert!(!unlocked(&c, "Use the --force", &history(&["cp --force a b"])));
    assert!(unlocked(&c, "No backsies", &history(&["rm -rf node_modules"])));
    assert!(!unlocked(&c, "No backsies", &history(&["rm -r node_modules"])));
}

#[test]
fn polyglot_needs_three_distinct_extensions() {
    let c = builtin();
    assert!(!unlocked(&c, "Polyglot", &history(&["git add a.go b.go c.py"])));
    assert!(unlocked(&c, "Polyglot", &history(&["git add a.go b.rs c.py"])));
    assert!(!unlocked(&c, "Polyglot", &history(&["vim a.go b.rs c.py"])));
}

#[test]
fn xcode_select_needs_three_installs() {
    let c = builtin();
    let name = "You know you're screwed when";
    let two = history(&["xcode-select --install", "xcode-select --install"]);
    assert!(!unlocked(&c, name, &two));
    let three = history(&[
        "xcode-select --install",
        "xcode-select -p",
        "xcode-select --install",
        "xcode-select --install",
    ]);
    assert!(unlocked(&c, name, &three));
}

#[test]
fn whole_catalogue_over_large_history() {
    let c = builtin();
    let commands = [
        "git commit -m wip",
        "go test ./...",
        "cargo build",
        "docker ps",
        "kubectl get pods",
        "python3 app.py",
        "ls -la",
        "git add a.go b.rs c.py",
    ];
    let start = at(0, 0);
    let h: Vec<Event> = (0..50_000_i64)
        .map(|i| {
            let raw = commands[usize::try_from(i).unwrap() % commands.len()];
            event(raw, start + Duration::minutes(i))
        })
        .collect();

    let results = c.evaluate(&h);
    assert_eq!(results.len(), c.len());
    for name in ["10xer", "I love Rob", "Zero-cost abstracter", "Cloud Native", "Parseltongue"] {
        assert!(
            results.iter().any(|r| r.rule.name == name && r.unlocked),
            "{name} should unlock"
        );
    }
    assert_eq!(c.evaluate(&h), results);
}

#[test]
fn every_shifted_occurrence_is_marked() {
    let entries: Vec<&str> = BUILTIN.split("[[achievement]]").collect();
    let mut marked = 0;
    for pair in entries.windows(2) {
        let Some(line) = pair[1].lines().find(|l| l.starts_with("occurrence = ")) else {
            continue;
        };
        let n: usize = line["occurrence = ".len()..].parse().unwrap();
        let mark = format!("# off by one: unlocks on match {n}, not {}\n", n - 1);
        assert!(pair[0].ends_with(&mark), "unmarked entry: {}", pair[1].trim());
        marked += 1;
    }
    assert_eq!(marked, 28);
}

// --- validation ---

#[test]
fn rejects_missing_unlock() {
    let err = Catalogue::from_toml("[[achievement]]\nname = \"x\"\n").unwrap_err();
    assert_eq!(err, CatalogueError::MissingUnlock { name: "x".into() });
}

#[test]
fn rejects_conflicting_unlock() {
    let toml = r#"
[[achievement]]
name = "x"
always = true
all = [{ command = "go" }]
"#;
    let err = Catalogue::from_toml(toml).unwrap_err();
    assert_eq!(err, CatalogueError::ConflictingUnlock { name: "x".into() });
}

#[test]
fn rejects_empty_conditions() {
    let toml = "[[achievement]]\nname = \"x\"\nany = []\n";
    let err = Catalogue::from_toml(toml).unwrap_err();
    assert_eq!(err, CatalogueError::EmptyConditions { name: "x".into() });
}

#[test]
fn rejects_zero_occurrence() {
    let toml = "[[achievement]]\nname = \"x\"\nall = [{ command = \"go\" }]\noccurrence = 0\n";
    let err = Catalogue::from_toml(toml).unwrap_err();
    assert_eq!(err, CatalogueError::ZeroOccurrence { name: "x".into() });
}

#[test]
fn rejects_occurrence_on_always() {
    let toml = "[[achievement]]\nname = \"x\"\nalways = true\noccurrence = 2\n";
    let err = Catalogue::from_toml(toml).unwrap_err();
    assert_eq!(
        err,
        CatalogueError::OccurrenceWithoutConditions { name: "x".into() }
    );
}

#[test]
fn rejects_duplicate_names() {
    let toml = r#"
[[achievement]]
name = "x"
always = true

[[achievement]]
name = "x"
all = [{ command = "go" }]
"#;
    let err = Catalogue::from_toml(toml).unwrap_err();
    assert_eq!(err, CatalogueError::DuplicateName { name: "x".into() });
}

#[test]
fn rejects_unknown_fields_and_conditions() {
    let unknown_field = "[[achievement]]\nname = \"x\"\nalways = true\ncolour = \"red\"\n";
    assert!(matches!(
        Catalogue::from_toml(unknown_field),
        Err(CatalogueError::Toml(_))
    ));

    let unknown_condition = "[[achievement]]\nname = \"x\"\nall = [{ shell = \"zsh\" }]\n";
    assert!(matches!(
        Catalogue::from_toml(unknown_condition),
        Err(CatalogueError::Toml(_))
    ));
}

#[test]
fn occurrence_converts_to_zero_based_index() {
    let toml = "[[achievement]]\nname = \"x\"\nall = [{ command = \"go\" }]\noccurrence = 3\n";
    let c = Catalogue::from_toml(toml).unwrap();
    assert_eq!(
        c.rules()[0].selector,
        Selector::nth(Filter::and([Condition::command("go")]), 2)
    );
}

#[test]
fn lint_flags_long_names() {
    let long = "A name that is clearly far too long";
    let c = Catalogue::from_rules(vec![AchievementRule::new(long, "", Selector::Always)]);
    assert_eq!(
        c.lint(),
        vec![LintWarning::NameTooLong {
            name: long.into(),
            len: long.chars().count(),
        }]
    );
}

#[test]
fn lint_counts_characters_not_bytes() {
    let name = "Gone fishin' 🐟🐟🐟🐟🐟🐟🐟🐟🐟🐟🐟🐟🐟";
    assert!(name.len() > MAX_NAME_LEN);
    assert!(name.chars().count() <= MAX_NAME_LEN);
    let c = Catalogue::from_rules(vec![AchievementRule::new(name, "", Selector::Always)]);
    assert!(c.lint().is_empty());
}

#[test]
fn empty_catalogue_file() {
    let c = Catalogue::from_toml("").unwrap();
    assert!(c.is_empty());
    assert!(c.evaluate(&history(&["ls"])).is_empty());
}
