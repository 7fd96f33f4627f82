/// One entry of the `services` catalog, as the panel reports it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Service {
    pub service: String,
    pub name: String,
    pub kind: String,
    pub category: String,
    pub rate: String,
    pub min: String,
    pub max: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderStatus {
    pub charge: String,
    pub start_count: String,
    pub status: String,
    pub remains: String,
    pub currency: String,
    /// Per-order failure reported inside a multi-order `status` response.
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserBalance {
    pub balance: String,
    pub currency: String,
}
