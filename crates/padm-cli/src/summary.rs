use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use padm_core::ModelArtifact;
use padm_model::{AssessmentReport, LabParameter, RiskTier};

const GAUGE_WIDTH: usize = 50;

pub fn print_report(report: &AssessmentReport) {
    let tier = report.assessment.tier;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("DIC Probability"),
        header_cell("Risk Level"),
        header_cell("Category"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Center);
    table.add_row(vec![
        Cell::new(format!("{:.1}%", report.assessment.probability * 100.0))
            .add_attribute(Attribute::Bold),
        tier_cell(tier),
        Cell::new(tier.category_id()),
    ]);
    println!("{table}");
    println!("{}", tier.band_description());
    println!();
    println!("{}", gauge_line(report));
    println!();
    print_parameter_table(report);
    println!();
    println!("{}", report.recommendations.title);
    for action in &report.recommendations.actions {
        println!("- {action}");
    }
    if let Some(considerations) = &report.recommendations.immediate_considerations {
        println!();
        println!("Immediate considerations - monitor for complications:");
        for item in considerations {
            println!("- {item}");
        }
    }
}

pub fn print_ranges() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Parameter"),
        header_cell("Name"),
        header_cell("Unit"),
        header_cell("Normal Range"),
        header_cell("Entry Default"),
        header_cell("Entry Max"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for parameter in LabParameter::ORDERED {
        let (min, max) = padm_core::normal_range(parameter);
        let spec = parameter.input_spec();
        table.add_row(vec![
            Cell::new(parameter.as_str()).add_attribute(Attribute::Bold),
            Cell::new(parameter.long_name()),
            Cell::new(parameter.unit()),
            Cell::new(format!("{min:.1} - {max:.1}")),
            Cell::new(format!("{:.1}", spec.default)),
            Cell::new(format!("{:.1}", spec.max)),
        ]);
    }
    println!("{table}");
}

pub fn print_model_info(artifact: &ModelArtifact) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Name"), Cell::new(&artifact.name)]);
    table.add_row(vec![Cell::new("Version"), Cell::new(&artifact.version)]);
    table.add_row(vec![
        Cell::new("Features"),
        Cell::new(artifact.features.join(", ")),
    ]);
    table.add_row(vec![
        Cell::new("Calibrated"),
        Cell::new(if artifact.calibration.is_some() {
            "yes"
        } else {
            "no"
        }),
    ]);
    if let Some(metrics) = &artifact.metrics {
        table.add_row(vec![
            Cell::new("AUC"),
            Cell::new(format!("{:.3}", metrics.auc)),
        ]);
        table.add_row(vec![
            Cell::new("Sensitivity"),
            Cell::new(format!("{:.1}%", metrics.sensitivity * 100.0)),
        ]);
        table.add_row(vec![
            Cell::new("Specificity"),
            Cell::new(format!("{:.1}%", metrics.specificity * 100.0)),
        ]);
    }
    println!("{table}");
}

fn print_parameter_table(report: &AssessmentReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Parameter"),
        header_cell("Value"),
        header_cell("Unit"),
        header_cell("Normal Range"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for check in &report.checks {
        table.add_row(vec![
            Cell::new(check.parameter.as_str()).add_attribute(Attribute::Bold),
            value_cell(check.value, check.is_abnormal),
            Cell::new(check.parameter.unit()),
            Cell::new(format!("{:.1} - {:.1}", check.normal_min, check.normal_max)),
            status_cell(check.is_abnormal),
        ]);
    }
    println!("{table}");
}

/// Single-line text gauge: band fill up to the probability marker.
fn gauge_line(report: &AssessmentReport) -> String {
    let filled = ((report.gauge.marker / 100.0) * GAUGE_WIDTH as f64).round() as usize;
    let filled = filled.min(GAUGE_WIDTH);
    let mut bar = String::with_capacity(GAUGE_WIDTH + 24);
    bar.push('[');
    for _ in 0..filled {
        bar.push('#');
    }
    for _ in filled..GAUGE_WIDTH {
        bar.push('.');
    }
    bar.push(']');
    bar.push_str(&format!(" Risk score: {:.1}%", report.gauge.marker));
    bar
}

fn status_cell(is_abnormal: bool) -> Cell {
    if is_abnormal {
        Cell::new("ABNORMAL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("NORMAL").fg(Color::Green)
    }
}

fn value_cell(value: f64, is_abnormal: bool) -> Cell {
    let cell = Cell::new(format!("{value:.1}"));
    if is_abnormal {
        cell.fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        cell.fg(Color::Green)
    }
}

fn tier_cell(tier: RiskTier) -> Cell {
    match tier {
        RiskTier::Low => Cell::new("LOW").fg(Color::Green),
        RiskTier::Medium => Cell::new("MEDIUM").fg(Color::Yellow),
        RiskTier::High => Cell::new("HIGH")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
