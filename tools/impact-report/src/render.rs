//! Text rendering of reports, catalogs and history listings.

use impactor_core::enums::{MetricGroup, MetricKey, Severity};
use impactor_core::report::{EffectReport, Metric};
use impactor_core::types::ImpactParameters;
use impactor_sim::format::{fixed, grouped};
use impactor_sim::scenario::Scenario;
use impactor_store::{HistoryStatistics, RunComparison, RunSummary, SavedRun};

const BAR_WIDTH: usize = 20;

/// Pictogram shown next to a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayHint {
    Crater,
    Explosion,
    Heat,
    Fireball,
    Blast,
    Debris,
    Quake,
    Dust,
    Casualties,
    Infrastructure,
    Money,
    Evacuation,
}

impl DisplayHint {
    pub fn glyph(self) -> &'static str {
        match self {
            DisplayHint::Crater => "(O)",
            DisplayHint::Explosion => "*!*",
            DisplayHint::Heat => "^^^",
            DisplayHint::Fireball => "(*)",
            DisplayHint::Blast => ")))",
            DisplayHint::Debris => ".:.",
            DisplayHint::Quake => "/\\/",
            DisplayHint::Dust => "~~~",
            DisplayHint::Casualties => "[+]",
            DisplayHint::Infrastructure => "[#]",
            DisplayHint::Money => "[$]",
            DisplayHint::Evacuation => "-->",
        }
    }
}

/// Presentation hint for a metric.
pub fn display_hint(key: MetricKey) -> DisplayHint {
    match key {
        MetricKey::CraterDiameter => DisplayHint::Crater,
        MetricKey::Energy => DisplayHint::Explosion,
        MetricKey::Temperature => DisplayHint::Heat,
        MetricKey::FireballRadius => DisplayHint::Fireball,
        MetricKey::ShockwaveRadius => DisplayHint::Blast,
        MetricKey::DebrisFieldRadius => DisplayHint::Debris,
        MetricKey::SeismicMagnitude => DisplayHint::Quake,
        MetricKey::AtmosphericDust => DisplayHint::Dust,
        MetricKey::CasualtiesImmediate => DisplayHint::Casualties,
        MetricKey::InfrastructureDamage => DisplayHint::Infrastructure,
        MetricKey::EconomicLoss => DisplayHint::Money,
        MetricKey::RefugeePopulation => DisplayHint::Evacuation,
    }
}

/// `[#####...............]` for a value in [0, 100].
pub fn progress_bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

fn severity_label(severity: Severity) -> String {
    severity.name().to_uppercase()
}

/// Join lines, newline-terminated.
fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn metric_line(key: MetricKey, metric: &Metric) -> String {
    format!(
        "  {} {:<22} {:>16} {:<22} {:<12} {}",
        display_hint(key).glyph(),
        key.label(),
        metric.value,
        metric.unit,
        severity_label(metric.severity),
        progress_bar(metric.progress_percent)
    )
}

fn report_lines(name: &str, params: &ImpactParameters, report: &EffectReport) -> Vec<String> {
    let loc = &params.location;
    let mut lines = vec![
        name.to_string(),
        format!(
            "  {} m at {} km/s, {} deg, {} kg/m3, over {} ({:.2}, {:.2})",
            params.diameter_meters,
            params.speed_km_per_sec,
            params.angle_degrees,
            params.density,
            loc.name,
            loc.latitude,
            loc.longitude
        ),
        format!("  Overall severity: {}", severity_label(report.worst_severity())),
    ];

    for group in MetricGroup::ALL {
        lines.push(String::new());
        lines.push(format!("== {} ==", group.title()));
        for (key, metric) in report.group(group) {
            lines.push(metric_line(*key, metric));
            lines.push(format!("      {}", metric.description));
        }
    }

    lines.push(String::new());
    lines.push("== Timeline ==".to_string());
    lines.extend(
        report
            .timeline
            .iter()
            .map(|entry| format!("  {:<12} {}", entry.time, entry.event)),
    );
    lines
}

/// Full report with a header describing the input.
pub fn render_report(name: &str, params: &ImpactParameters, report: &EffectReport) -> String {
    finish(report_lines(name, params, report))
}

/// A saved run: its metadata, then its report.
pub fn render_saved_run(run: &SavedRun) -> String {
    let mut lines = vec![format!("{} (saved at {})", run.id, run.timestamp)];
    if let Some(updated) = run.updated_at {
        lines.push(format!("  edited at {updated}"));
    }
    if !run.tags.is_empty() {
        lines.push(format!("  tags: {}", run.tags.join(", ")));
    }
    if let Some(ref description) = run.description {
        lines.push(format!("  {description}"));
    }
    lines.push(String::new());
    lines.extend(report_lines(&run.name, &run.parameters, &run.report));
    finish(lines)
}

pub fn render_presets(scenarios: &[Scenario]) -> String {
    let lines = scenarios
        .iter()
        .flat_map(|s| {
            [
                format!(
                    "{:<22} {:<22} {:>6} m {:>5} km/s {:>4} deg {:<6} {}",
                    s.id.slug(),
                    s.name,
                    s.diameter_meters,
                    s.speed_km_per_sec,
                    s.angle_degrees,
                    s.composition.name(),
                    s.location.name
                ),
                format!("    {}", s.description),
            ]
        })
        .collect();
    finish(lines)
}

pub fn render_summaries(summaries: &[RunSummary]) -> String {
    if summaries.is_empty() {
        return "No saved runs.\n".to_string();
    }
    let lines = summaries
        .iter()
        .map(|s| {
            let mut line = format!(
                "{:<22} {:>12} {:<13} {:<20} {}",
                s.id,
                s.timestamp,
                severity_label(s.worst_severity),
                s.location,
                s.name
            );
            if !s.tags.is_empty() {
                line.push_str(&format!(" [{}]", s.tags.join(", ")));
            }
            line
        })
        .collect();
    finish(lines)
}

pub fn render_comparison(comparison: &RunComparison) -> String {
    let summary = &comparison.summary;
    let compositions: Vec<&str> = summary.compositions.iter().map(|c| c.name()).collect();
    let mut lines = vec![
        format!("Comparing {} runs", summary.total_compared),
        format!("  locations: {}", summary.locations.join(", ")),
        format!("  compositions: {}", compositions.join(", ")),
        format!("  worst severity: {}", severity_label(summary.worst_severity)),
    ];
    for metric in &comparison.metrics {
        lines.push(String::new());
        lines.push(format!(
            "== {} {} ==",
            display_hint(metric.metric).glyph(),
            metric.metric.label()
        ));
        lines.extend(metric.values.iter().map(|v| {
            format!(
                "  {:<22} {:<24} {:>16} {:<22} {}",
                v.run_id,
                v.name,
                v.value,
                v.unit,
                severity_label(v.severity)
            )
        }));
    }
    finish(lines)
}

pub fn render_statistics(stats: &HistoryStatistics) -> String {
    if stats.total_runs == 0 {
        return "No saved runs.\n".to_string();
    }
    let mut lines = vec![format!("Saved runs: {}", stats.total_runs)];
    if let Some(last) = stats.last_run_at {
        lines.push(format!("Last run at: {last}"));
    }
    if let Some(energy) = stats.average_energy_megatons {
        lines.push(format!("Average energy: {} MT", grouped(energy)));
    }
    if let Some(crater) = stats.average_crater_km {
        lines.push(format!("Average crater: {} km", fixed(crater, 1)));
    }
    lines.push(String::new());
    lines.push("Most used locations:".to_string());
    lines.extend(
        stats
            .popular_locations
            .iter()
            .map(|l| format!("  {:<20} {}", l.name, l.count)),
    );
    finish(lines)
}
