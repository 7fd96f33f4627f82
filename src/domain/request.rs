use crate::domain::value::ServiceId;

/// Optional `add` fields. Each is sent only when set; `Some(0)` is sent as `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddOrderOptions {
    /// Number of drip-feed runs (`runs`).
    pub runs: Option<u32>,
    /// Minutes between drip-feed runs (`interval`).
    pub interval: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOrder {
    service: ServiceId,
    link: String,
    quantity: u64,
    options: AddOrderOptions,
}

impl AddOrder {
    pub const LINK_FIELD: &'static str = "link";
    pub const QUANTITY_FIELD: &'static str = "quantity";
    pub const RUNS_FIELD: &'static str = "runs";
    pub const INTERVAL_FIELD: &'static str = "interval";

    pub fn new(service: impl Into<ServiceId>, link: impl Into<String>, quantity: u64) -> Self {
        Self {
            service: service.into(),
            link: link.into(),
            quantity,
            options: AddOrderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AddOrderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_runs(mut self, runs: u32) -> Self {
        self.options.runs = Some(runs);
        self
    }

    pub fn with_interval(mut self, interval: u32) -> Self {
        self.options.interval = Some(interval);
        self
    }

    pub fn service(&self) -> &ServiceId {
        &self.service
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn options(&self) -> &AddOrderOptions {
        &self.options
    }
}
