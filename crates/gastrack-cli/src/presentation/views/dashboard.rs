use crate::presentation::DisplayOptions;
use chrono::NaiveDate;
use gastrack_engine::format::{format_date, long_date, month_name};
use gastrack_types::{DashboardStats, MIN_CHART_POINTS};
use owo_colors::OwoColorize;
use std::fmt;

const LABEL_WIDTH: usize = 24;
const BAR_WIDTH: usize = 30;

/// Summary figures plus a bar rendering of the efficiency trend
pub struct DashboardView<'a> {
    stats: &'a DashboardStats,
    today: NaiveDate,
    entry_count: usize,
    options: &'a DisplayOptions,
}

impl<'a> DashboardView<'a> {
    pub fn new(
        stats: &'a DashboardStats,
        today: NaiveDate,
        entry_count: usize,
        options: &'a DisplayOptions,
    ) -> Self {
        Self {
            stats,
            today,
            entry_count,
            options,
        }
    }

    fn heading(&self, f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
        if self.options.enable_color {
            writeln!(f, "{}", text.cyan().bold())
        } else {
            writeln!(f, "{}", text)
        }
    }

    fn line(&self, f: &mut fmt::Formatter<'_>, label: &str, value: &str) -> fmt::Result {
        writeln!(f, "  {:<width$}{}", label, value, width = LABEL_WIDTH)
    }

    fn render_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nf = &self.options.number_format;
        let stats = self.stats;
        let month = month_name(self.today);

        self.heading(f, "Resumo")?;
        self.line(f, "Média Geral", &nf.efficiency(stats.average_efficiency))?;
        let best = match stats.best_efficiency {
            Some(best) => format!("{} ({})", nf.efficiency(best.value), format_date(best.date)),
            None => "-".to_string(),
        };
        self.line(f, "Melhor Média", &best)?;
        self.line(
            f,
            &format!("Gasto ({})", month),
            &nf.currency(stats.current_month_cost),
        )?;
        self.line(
            f,
            &format!("Km ({})", month),
            &nf.distance(stats.current_month_distance),
        )?;
        self.line(f, "Gasto Total", &nf.currency(stats.total_cost))?;
        self.line(f, "Km Total", &nf.distance(stats.total_distance))?;
        self.line(f, "Custo por Km", &nf.currency(stats.cost_per_distance))?;
        self.line(
            f,
            &format!("Custo por Km ({})", month),
            &nf.currency(stats.current_month_cost_per_distance),
        )
    }

    fn render_trend(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.heading(f, "Tendência de Consumo")?;

        if !self.stats.has_trend() {
            return writeln!(
                f,
                "  Dados insuficientes: são necessários pelo menos {} intervalos válidos.",
                MIN_CHART_POINTS
            );
        }

        let nf = &self.options.number_format;
        let peak = self
            .stats
            .efficiency_series
            .iter()
            .map(|point| point.value)
            .fold(0.0_f64, f64::max);

        for point in &self.stats.efficiency_series {
            let bar = "█".repeat(bar_length(point.value, peak));
            let padded = format!("{:<width$}", bar, width = BAR_WIDTH);
            let bar = if self.options.enable_color {
                padded.green().to_string()
            } else {
                padded
            };
            writeln!(
                f,
                "  {}  {}  {}",
                format_date(point.date),
                bar,
                nf.efficiency(point.value)
            )?;
        }
        Ok(())
    }
}

/// Bar cells for `value` relative to `peak`; any positive value gets at least one
fn bar_length(value: f64, peak: f64) -> usize {
    if peak <= 0.0 || value <= 0.0 {
        return 0;
    }
    let cells = (value / peak * BAR_WIDTH as f64).round() as usize;
    cells.clamp(1, BAR_WIDTH)
}

impl fmt::Display for DashboardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = long_date(self.today);
        if self.options.enable_color {
            writeln!(f, "{}", header.bold())?;
        } else {
            writeln!(f, "{}", header)?;
        }
        writeln!(f)?;

        if self.entry_count == 0 {
            writeln!(f, "Nenhum abastecimento registrado.")?;
            writeln!(
                f,
                "Use 'gastrack add --odometer <km> --price <per liter> --liters <L>' to add one."
            )?;
            return Ok(());
        }

        self.render_summary(f)?;
        writeln!(f)?;
        self.render_trend(f)
    }
}
