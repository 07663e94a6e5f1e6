//! Begrenzter Verlauf ausgeführter Commands.

use super::AppCommand;

/// Hält die zuletzt ausgeführten Commands in Ausführungs-Reihenfolge,
/// für Diagnose und Tests.
///
/// Beim Erreichen der Kapazität wird die ältere Hälfte verworfen; der
/// jüngste Verlauf bleibt erhalten.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    /// Obergrenze des Verlaufs.
    const CAPACITY: usize = 1000;

    /// Erstellt ein leeres Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen ausgeführten Command an.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::CAPACITY {
            self.entries.drain(..Self::CAPACITY / 2);
        }
        self.entries.push(command.clone());
    }

    /// Der zuletzt ausgeführte Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }

    /// Alle Einträge in Ausführungs-Reihenfolge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_keeps_recent_half() {
        let mut log = CommandLog::new();
        for _ in 0..CommandLog::CAPACITY {
            log.record(&AppCommand::ResetView);
        }
        log.record(&AppCommand::RequestExit);

        assert_eq!(log.entries().len(), CommandLog::CAPACITY / 2 + 1);
        assert!(matches!(log.last(), Some(AppCommand::RequestExit)));
    }
}
