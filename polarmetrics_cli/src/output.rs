use anyhow::{bail, Result};
use serde::Serialize;
use polarmetrics_lib::report::{self, LocalPoliticalReport};
use polarmetrics_lib::{Bill, DistrictInfo, LegislatorRecord, Vote};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => bail!("unknown output format '{}'. Valid values: table, json, csv, markdown", other),
        }
    }
}

#[derive(Tabled, Serialize)]
struct RepresentativeRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Party")]
    #[serde(rename = "Party")]
    party: String,
    #[tabled(rename = "State")]
    #[serde(rename = "State")]
    state: String,
    #[tabled(rename = "District")]
    #[serde(rename = "District")]
    district: String,
    #[tabled(rename = "Chamber")]
    #[serde(rename = "Chamber")]
    chamber: String,
    #[tabled(rename = "Bioguide ID")]
    #[serde(rename = "Bioguide ID")]
    bioguide_id: String,
}

#[derive(Tabled, Serialize)]
struct BillRow {
    #[tabled(rename = "Number")]
    #[serde(rename = "Number")]
    number: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Sponsors")]
    #[serde(rename = "Sponsors")]
    sponsors: String,
    #[tabled(rename = "Latest Action")]
    #[serde(rename = "Latest Action")]
    latest_action: String,
}

#[derive(Tabled, Serialize)]
struct VoteRow {
    #[tabled(rename = "Roll Call")]
    #[serde(rename = "Roll Call")]
    roll_call: String,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Question")]
    #[serde(rename = "Question")]
    question: String,
    #[tabled(rename = "Result")]
    #[serde(rename = "Result")]
    result: String,
    #[tabled(rename = "Legislation")]
    #[serde(rename = "Legislation")]
    legislation: String,
}

#[derive(Tabled, Serialize)]
struct OfficialRow {
    #[tabled(rename = "Office")]
    #[serde(rename = "Office")]
    office: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Party")]
    #[serde(rename = "Party")]
    party: String,
}

// -- Row builders --

fn build_representative_rows(records: &[LegislatorRecord]) -> Vec<RepresentativeRow> {
    records
        .iter()
        .map(|r| RepresentativeRow {
            name: r.display_name().to_string(),
            party: r.display_party().to_string(),
            state: r.state.clone().unwrap_or_default(),
            district: r
                .district
                .or_else(|| r.terms.iter().find_map(|t| t.district))
                .map(|d| d.to_string())
                .unwrap_or_default(),
            chamber: r.chamber().unwrap_or("Unknown").to_string(),
            bioguide_id: r.bioguide_id.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_bill_rows(bills: &[Bill]) -> Vec<BillRow> {
    bills
        .iter()
        .map(|b| BillRow {
            number: match (&b.bill_type, &b.number) {
                (Some(kind), Some(number)) => format!("{} {}", kind, number),
                (None, Some(number)) => number.clone(),
                _ => "Unknown".to_string(),
            },
            title: b
                .title
                .clone()
                .unwrap_or_else(|| "No title available".to_string()),
            sponsors: b
                .sponsors
                .iter()
                .filter_map(|s| s.full_name.as_deref().or(s.bioguide_id.as_deref()))
                .collect::<Vec<_>>()
                .join("; "),
            latest_action: b
                .latest_action
                .as_ref()
                .map(|a| match (&a.action_date, &a.text) {
                    (Some(date), Some(text)) => format!("{}: {}", date, text),
                    (None, Some(text)) => text.clone(),
                    (Some(date), None) => date.clone(),
                    (None, None) => String::new(),
                })
                .unwrap_or_default(),
        })
        .collect()
}

fn build_vote_rows(votes: &[Vote]) -> Vec<VoteRow> {
    votes
        .iter()
        .map(|v| VoteRow {
            roll_call: v
                .roll_call_number
                .map(|n| n.to_string())
                .unwrap_or_default(),
            date: v
                .start_date
                .as_deref()
                .map(|d| d.get(..10).unwrap_or(d).to_string())
                .unwrap_or_default(),
            question: v.question.clone().unwrap_or_default(),
            result: v.result.clone().unwrap_or_default(),
            legislation: v.legislation.clone().unwrap_or_default(),
        })
        .collect()
}

/// One row per official, labelled with the office that lists them.
fn build_official_rows(info: &DistrictInfo) -> Vec<OfficialRow> {
    info.raw_representatives
        .iter()
        .enumerate()
        .map(|(idx, official)| OfficialRow {
            office: info
                .raw_offices
                .iter()
                .rev()
                .find(|o| o.official_indices.contains(&idx))
                .and_then(|o| o.name.clone())
                .unwrap_or_default(),
            name: official.name.clone().unwrap_or_else(|| "Unknown".to_string()),
            party: official.party.clone().unwrap_or_else(|| "Unknown".to_string()),
        })
        .collect()
}

// -- Generic emitters --

fn print_rows<T: Tabled + Serialize>(rows: Vec<T>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(&rows),
    }
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

// -- Per-domain output --

pub fn print_representatives(records: &[LegislatorRecord], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&records);
            Ok(())
        }
        _ => print_rows(build_representative_rows(records), format),
    }
}

pub fn print_bills(bills: &[Bill], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&bills);
            Ok(())
        }
        _ => print_rows(build_bill_rows(bills), format),
    }
}

pub fn print_votes(votes: &[Vote], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&votes);
            Ok(())
        }
        _ => print_rows(build_vote_rows(votes), format),
    }
}

pub fn print_district(info: &DistrictInfo, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(info);
            Ok(())
        }
        OutputFormat::Csv => print_rows(build_official_rows(info), format),
        _ => {
            println!(
                "Congressional District: {}",
                report::district_label(info.state.as_deref(), info.district)
            );
            if let Some(input) = &info.normalized_input {
                let parts: Vec<&str> = [&input.line1, &input.city, &input.state, &input.zip]
                    .iter()
                    .filter_map(|p| p.as_deref())
                    .collect();
                if !parts.is_empty() {
                    println!("Normalized Address: {}", parts.join(", "));
                }
            }
            if info.raw_representatives.is_empty() {
                return Ok(());
            }
            println!();
            print_rows(build_official_rows(info), format)
        }
    }
}

/// Rendered summary lines, then the matched representatives and local bills.
/// CSV carries the representatives only.
pub fn print_report(report: &LocalPoliticalReport, format: &OutputFormat) -> Result<()> {
    let reps = &report.representatives().from_congress;
    match format {
        OutputFormat::Json => {
            print_json(report);
            Ok(())
        }
        OutputFormat::Csv => print_rows(build_representative_rows(reps), format),
        OutputFormat::Table | OutputFormat::Markdown => {
            for line in report::render(report) {
                println!("{}", line);
            }
            if !reps.is_empty() {
                println!();
                print_rows(build_representative_rows(reps), format)?;
            }
            let bills = &report.legislation().local_bills;
            if !bills.is_empty() {
                println!();
                print_rows(build_bill_rows(bills), format)?;
            }
            Ok(())
        }
    }
}
