use crate::presentation::DisplayOptions;
use gastrack_engine::format::format_date;
use gastrack_types::ComputedEntry;
use owo_colors::OwoColorize;
use std::fmt;

const STARTING_POINT: &str = "Ponto Inicial";

/// Refuel timeline, newest first, one row per fill
pub struct HistoryView<'a> {
    timeline: &'a [ComputedEntry],
    options: &'a DisplayOptions,
}

impl<'a> HistoryView<'a> {
    pub fn new(timeline: &'a [ComputedEntry], options: &'a DisplayOptions) -> Self {
        Self { timeline, options }
    }

    fn row(&self, computed: &ComputedEntry) -> [String; 7] {
        let nf = &self.options.number_format;
        let entry = &computed.entry;
        let (distance, efficiency) = match computed.efficiency {
            None => ("-".to_string(), STARTING_POINT.to_string()),
            Some(efficiency) => (nf.distance(computed.distance), nf.efficiency(efficiency)),
        };
        [
            entry.id.short().to_string(),
            format_date(entry.date),
            nf.distance(entry.odometer),
            format!("{} L", nf.number(entry.liters, 2)),
            nf.currency(entry.total_cost),
            distance,
            efficiency,
        ]
    }
}

impl fmt::Display for HistoryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.timeline.is_empty() {
            writeln!(f, "Nenhum abastecimento registrado.")?;
            writeln!(
                f,
                "Use 'gastrack add --odometer <km> --price <per liter> --liters <L>' to add one."
            )?;
            return Ok(());
        }

        let header = [
            "ID", "DATA", "ODÔMETRO", "LITROS", "TOTAL", "DISTÂNCIA", "CONSUMO",
        ]
        .map(str::to_string);
        let rows: Vec<[String; 7]> = self.timeline.iter().map(|c| self.row(c)).collect();

        let mut widths = header.clone().map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header_line = layout(&header, &widths);
        if self.options.enable_color {
            writeln!(f, "{}", header_line.bold())?;
        } else {
            writeln!(f, "{}", header_line)?;
        }

        for (row, computed) in rows.iter().zip(self.timeline) {
            let line = layout(row, &widths);
            if self.options.enable_color && computed.is_starting_point() {
                writeln!(f, "{}", line.dimmed())?;
            } else {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

/// Left-align text columns, right-align numeric ones
fn layout(cells: &[String; 7], widths: &[usize; 7]) -> String {
    let mut line = String::new();
    for (index, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if index > 0 {
            line.push_str("  ");
        }
        let padded = match index {
            0 | 1 | 6 => format!("{:<width$}", cell, width = *width),
            _ => format!("{:>width$}", cell, width = *width),
        };
        line.push_str(&padded);
    }
    line.trim_end().to_string()
}
