//! Mediator configuration

/// Behaviour switches for the mediated operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediatorConfig {
    /// Call the host's error collaborator for unknown names. The failed
    /// operation still returns `false`/`Err` when this is off.
    pub report_unknown: bool,
    /// Treat a custom setter's `Err` as a failed `set`: report it and
    /// return `false` instead of `true`.
    pub surface_setter_rejections: bool,
}

impl Default for MediatorConfig {
    fn default() -> Self {
        Self {
            report_unknown: true,
            surface_setter_rejections: false,
        }
    }
}

impl MediatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report_unknown(mut self, report: bool) -> Self {
        self.report_unknown = report;
        self
    }

    pub fn with_surface_setter_rejections(mut self, surface: bool) -> Self {
        self.surface_setter_rejections = surface;
        self
    }

    /// Setter rejections become failures of `set`.
    pub fn strict() -> Self {
        Self {
            report_unknown: true,
            surface_setter_rejections: true,
        }
    }
}
