use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;

use tracing::debug;

use crate::reports::{ConversionsReport, DocumentsReport, JournalReport, ReportArgs};
use crate::width::WidthSource;
use crate::{Report, ReportError, ReportFormat, ReportInput};

/// Builds a report from its arguments.
pub type ReportFactory = fn(ReportArgs) -> Box<dyn Report>;

fn journal(args: ReportArgs) -> Box<dyn Report> {
    Box::new(JournalReport::new(args))
}

fn conversions(args: ReportArgs) -> Box<dyn Report> {
    Box::new(ConversionsReport::new(args))
}

fn documents(args: ReportArgs) -> Box<dyn Report> {
    Box::new(DocumentsReport::new(args))
}

/// Maps report names to the reports they build.
pub struct ReportRegistry {
    factories: BTreeMap<&'static str, ReportFactory>,
    width_source: Box<dyn WidthSource>,
}

impl fmt::Debug for ReportRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportRegistry")
            .field("reports", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ReportRegistry {
    /// A registry with no reports. Widths left unset are taken from `width_source`.
    pub fn empty(width_source: impl WidthSource + 'static) -> Self {
        ReportRegistry {
            factories: BTreeMap::new(),
            width_source: Box::new(width_source),
        }
    }

    /// A registry with the journal, conversions and documents reports.
    pub fn new(width_source: impl WidthSource + 'static) -> Self {
        let mut registry = Self::empty(width_source);
        for name in JournalReport::NAMES {
            registry.register(*name, journal);
        }
        registry.register(ConversionsReport::NAME, conversions);
        registry.register(DocumentsReport::NAME, documents);
        registry
    }

    /// Registers `factory` under `name`, returning the factory it replaces.
    pub fn register(&mut self, name: &'static str, factory: ReportFactory) -> Option<ReportFactory> {
        self.factories.insert(name, factory)
    }

    /// Registered names, in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }

    pub fn create(&self, name: &str, args: ReportArgs) -> Result<Box<dyn Report>, ReportError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| ReportError::UnknownReport(name.to_string()))?;
        Ok(factory(args))
    }

    /// Builds the report registered as `name` and renders it from `input`.
    pub fn dispatch(
        &self,
        name: &str,
        mut args: ReportArgs,
        input: &ReportInput<'_, '_>,
        format: ReportFormat,
        w: &mut dyn Write,
    ) -> Result<(), ReportError> {
        if args.width == 0 {
            args.width = self.width_source.width();
        }
        debug!(report = name, %format, width = args.width, "dispatching report");
        let report = self.create(name, args)?;
        if !report.formats().contains(&format) {
            return Err(ReportError::UnsupportedFormat {
                report: report.name(),
                format,
            });
        }
        report.render(input, format, w)
    }
}
