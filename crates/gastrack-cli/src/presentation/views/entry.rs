use crate::presentation::DisplayOptions;
use gastrack_engine::format::format_date;
use gastrack_types::{ComputedEntry, FuelEntry};
use owo_colors::OwoColorize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    Added,
    Updated,
    Deleted,
}

impl EntryAction {
    fn title(self) -> &'static str {
        match self {
            EntryAction::Added => "Abastecimento registrado",
            EntryAction::Updated => "Abastecimento atualizado",
            EntryAction::Deleted => "Abastecimento removido",
        }
    }
}

/// Confirmation shown after add, edit or delete
pub struct EntryView<'a> {
    action: EntryAction,
    entry: &'a FuelEntry,
    computed: Option<&'a ComputedEntry>,
    options: &'a DisplayOptions,
}

impl<'a> EntryView<'a> {
    /// Entry with its interval metrics
    pub fn computed(
        action: EntryAction,
        computed: &'a ComputedEntry,
        options: &'a DisplayOptions,
    ) -> Self {
        Self {
            action,
            entry: &computed.entry,
            computed: Some(computed),
            options,
        }
    }

    pub fn plain(action: EntryAction, entry: &'a FuelEntry, options: &'a DisplayOptions) -> Self {
        Self {
            action,
            entry,
            computed: None,
            options,
        }
    }
}

impl fmt::Display for EntryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nf = &self.options.number_format;
        let title = format!("{} ({})", self.action.title(), self.entry.id.short());
        if !self.options.enable_color {
            writeln!(f, "{}", title)?;
        } else if self.action == EntryAction::Deleted {
            writeln!(f, "{}", title.yellow().bold())?;
        } else {
            writeln!(f, "{}", title.green().bold())?;
        }

        writeln!(f, "  Data:       {}", format_date(self.entry.date))?;
        writeln!(f, "  Odômetro:   {}", nf.distance(self.entry.odometer))?;
        writeln!(f, "  Preço/L:    {}", nf.currency(self.entry.price_per_liter))?;
        writeln!(f, "  Litros:     {} L", nf.number(self.entry.liters, 2))?;
        writeln!(f, "  Total:      {}", nf.currency(self.entry.total_cost))?;

        if let Some(computed) = self.computed {
            match computed.efficiency {
                None => writeln!(f, "  Consumo:    Ponto Inicial")?,
                Some(efficiency) => {
                    writeln!(f, "  Distância:  {}", nf.distance(computed.distance))?;
                    writeln!(f, "  Consumo:    {}", nf.efficiency(efficiency))?;
                }
            }
        }
        Ok(())
    }
}
