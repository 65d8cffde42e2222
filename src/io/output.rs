use crate::blm::{BlmId, DrawingCoverage, DrawingStatus, SortDirection, SortKey};
use crate::core::Module;
use crate::difficulty::{HeatMapGrid, IntensityLabel};
use clap::ValueEnum;
use colored::*;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            "terminal" | "text" => Some(Self::Terminal),
            _ => None,
        }
    }
}

/// A parsed identifier next to the text it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedIdentifier {
    pub input: String,
    #[serde(flatten)]
    pub id: BlmId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortedModules {
    pub key: SortKey,
    pub direction: SortDirection,
    pub modules: Vec<SortedModule>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortedModule {
    pub serial_number: String,
    pub blm: String,
    pub build_sequence: Option<i64>,
    pub sawbox: bool,
}

impl SortedModule {
    pub fn from_module(module: &Module, id: &BlmId) -> Self {
        Self {
            serial_number: module.serial_number.clone(),
            blm: if id.is_matched() {
                id.to_string()
            } else {
                id.raw.clone()
            },
            build_sequence: module.build_sequence,
            sawbox: module.sawbox,
        }
    }
}

/// Everything the CLI can print.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Parsed(Vec<ParsedIdentifier>),
    Coverage(DrawingCoverage),
    Sorted(SortedModules),
    HeatMap(HeatMapGrid),
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()>;

    /// Push buffered output to the sink. Must be called before the writer is
    /// dropped, otherwise write failures are lost.
    fn flush(&mut self) -> anyhow::Result<()>;
}

pub fn create_writer<'a>(format: OutputFormat, writer: Box<dyn Write + 'a>) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_parsed(&mut self, parsed: &[ParsedIdentifier]) -> anyhow::Result<()> {
        writeln!(self.writer, "| Input | Building | Level | Module | Normalized |")?;
        writeln!(self.writer, "|-------|----------|-------|--------|------------|")?;
        for p in parsed {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} |",
                p.input, p.id.building, p.id.level, p.id.module, p.id.raw
            )?;
        }
        Ok(())
    }

    fn write_coverage(&mut self, coverage: &DrawingCoverage) -> anyhow::Result<()> {
        writeln!(self.writer, "# Shop Drawing Coverage")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} of {} modules matched ({:.1}%), {} missing",
            coverage.matched,
            coverage.total,
            coverage.coverage_percent(),
            coverage.missing
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Serial | BLM | Sawbox | Drawing |")?;
        writeln!(self.writer, "|--------|-----|--------|---------|")?;
        for m in &coverage.modules {
            let drawing = match &m.status {
                DrawingStatus::Matched { drawing } => drawing.as_str(),
                DrawingStatus::Missing => "**Missing**",
            };
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                m.serial_number,
                m.blm,
                if m.sawbox { "yes" } else { "" },
                drawing
            )?;
        }
        Ok(())
    }

    fn write_sorted(&mut self, sorted: &SortedModules) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "# Modules by {} ({})",
            sorted.key, sorted.direction
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| # | Serial | BLM | Sequence |")?;
        writeln!(self.writer, "|---|--------|-----|----------|")?;
        for (i, m) in sorted.modules.iter().enumerate() {
            let sequence = m.build_sequence.map(|s| s.to_string()).unwrap_or_default();
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                i + 1,
                m.serial_number,
                m.blm,
                sequence
            )?;
        }
        Ok(())
    }

    fn write_heat_map(&mut self, grid: &HeatMapGrid) -> anyhow::Result<()> {
        let dates = grid.dates();
        writeln!(self.writer, "# Station Difficulty")?;
        writeln!(self.writer)?;

        let header: Vec<String> = dates.iter().map(|d| d.format("%a %m/%d").to_string()).collect();
        writeln!(self.writer, "| Station | {} |", header.join(" | "))?;
        writeln!(self.writer, "|---------|{}", "---|".repeat(dates.len()))?;

        for station in grid.stations() {
            let cells: Vec<String> = dates
                .iter()
                .map(|date| match grid.cell(station, *date) {
                    Some(cell) if cell.label == IntensityLabel::NoModules => "-".to_string(),
                    Some(cell) => format!(
                        "{} ({:+}, {})",
                        cell.label, cell.result.score, cell.result.module_count
                    ),
                    None => String::new(),
                })
                .collect();
            writeln!(self.writer, "| {} | {} |", station, cells.join(" | "))?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        match report {
            Report::Parsed(parsed) => self.write_parsed(parsed),
            Report::Coverage(coverage) => self.write_coverage(coverage),
            Report::Sorted(sorted) => self.write_sorted(sorted),
            Report::HeatMap(grid) => self.write_heat_map(grid),
        }
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_parsed(&mut self, parsed: &[ParsedIdentifier]) -> anyhow::Result<()> {
        for p in parsed {
            if p.id.is_matched() {
                writeln!(
                    self.writer,
                    "{:<24} building {} level {} module {}",
                    p.input,
                    p.id.building.bold(),
                    p.id.level.to_string().bold(),
                    p.id.module.to_string().bold()
                )?;
            } else {
                writeln!(self.writer, "{:<24} {}", p.input, "no BLM identifier".yellow())?;
            }
        }
        Ok(())
    }

    fn write_coverage(&mut self, coverage: &DrawingCoverage) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "SHOP DRAWING COVERAGE".bold())?;
        for m in &coverage.modules {
            let status = match &m.status {
                DrawingStatus::Matched { drawing } => drawing.green().to_string(),
                DrawingStatus::Missing => "Missing".red().bold().to_string(),
            };
            let sawbox = if m.sawbox { " (sawbox)" } else { "" };
            writeln!(
                self.writer,
                "  {:<12} {:<14}{} {}",
                m.serial_number, m.blm, sawbox, status
            )?;
        }
        let summary = format!(
            "{}/{} matched ({:.1}%)",
            coverage.matched,
            coverage.total,
            coverage.coverage_percent()
        );
        if coverage.missing == 0 {
            writeln!(self.writer, "{}", summary.green())?;
        } else {
            writeln!(self.writer, "{}, {} missing", summary.yellow(), coverage.missing)?;
        }
        Ok(())
    }

    fn write_sorted(&mut self, sorted: &SortedModules) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            format!("MODULES BY {} ({})", sorted.key, sorted.direction)
                .to_uppercase()
                .bold()
        )?;
        for (i, m) in sorted.modules.iter().enumerate() {
            let sequence = m
                .build_sequence
                .map(|s| format!("seq {s}"))
                .unwrap_or_else(|| "seq -".to_string());
            writeln!(
                self.writer,
                "  {:>3}. {:<12} {:<14} {}",
                i + 1,
                m.serial_number,
                m.blm,
                sequence.dimmed()
            )?;
        }
        Ok(())
    }

    fn write_heat_map(&mut self, grid: &HeatMapGrid) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "STATION DIFFICULTY".bold())?;
        let dates = grid.dates();
        for station in grid.stations() {
            writeln!(self.writer, "  {}", station.bold())?;
            for date in &dates {
                let Some(cell) = grid.cell(station, *date) else {
                    continue;
                };
                writeln!(
                    self.writer,
                    "    {}  {} score {:+} over {} modules",
                    date.format("%a %Y-%m-%d"),
                    colorize_label(cell.label),
                    cell.result.score,
                    cell.result.module_count
                )?;
            }
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        match report {
            Report::Parsed(parsed) => self.write_parsed(parsed),
            Report::Coverage(coverage) => self.write_coverage(coverage),
            Report::Sorted(sorted) => self.write_sorted(sorted),
            Report::HeatMap(grid) => self.write_heat_map(grid),
        }
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn colorize_label(label: IntensityLabel) -> ColoredString {
    let text = format!("{:<11}", label.as_str());
    match label {
        IntensityLabel::Light => text.cyan(),
        IntensityLabel::Normal => text.green(),
        IntensityLabel::Moderate => text.yellow(),
        IntensityLabel::Heavy => text.red(),
        IntensityLabel::VeryHeavy => text.red().bold(),
        IntensityLabel::NoModules => text.dimmed(),
    }
}
