use serde::{Deserialize, Serialize};

use greenscape_core::{DomainError, DomainResult, Entity, ValueObject};

greenscape_core::uuid_newtype!(
    /// Inventory item identifier.
    pub struct InventoryItemId,
    "InventoryItemId"
);

/// Inventory category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Vehicles & Machinery")]
    VehiclesAndMachinery,
    #[serde(rename = "Construction & Maintenance Supplies")]
    ConstructionSupplies,
    #[serde(rename = "Gardening Tools & Equipment")]
    GardeningTools,
    #[serde(rename = "Pesticides & Herbicides")]
    PesticidesAndHerbicides,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::VehiclesAndMachinery => "Vehicles & Machinery",
            Category::ConstructionSupplies => "Construction & Maintenance Supplies",
            Category::GardeningTools => "Gardening Tools & Equipment",
            Category::PesticidesAndHerbicides => "Pesticides & Herbicides",
            Category::Other => "Other",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often an item needs routine maintenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaintenanceSchedule {
    #[serde(rename = "Every Day")]
    EveryDay,
    #[serde(rename = "Every Week")]
    EveryWeek,
    #[serde(rename = "Every Month")]
    EveryMonth,
}

impl MaintenanceSchedule {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceSchedule::EveryDay => "Every Day",
            MaintenanceSchedule::EveryWeek => "Every Week",
            MaintenanceSchedule::EveryMonth => "Every Month",
        }
    }
}

impl core::fmt::Display for MaintenanceSchedule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit price in rupees. Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation("price must be a valid number"));
        }
        if value <= 0.0 {
            return Err(DomainError::validation("price must be greater than 0"));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Display form used in listings and reports, e.g. `Rs.12.50`.
    pub fn formatted(&self) -> String {
        format!("Rs.{:.2}", self.0)
    }
}

impl ValueObject for Price {}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Price::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

/// Input for adding an item, also used for full replacement.
///
/// Reorder level/amount are deliberately absent: they start at 0 and only
/// change through [`InventoryItem::set_threshold`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInventoryItem {
    pub item_name: String,
    pub category: Category,
    pub quantity: u32,
    pub supplier: String,
    pub price: Price,
    pub maintenance_schedule: MaintenanceSchedule,
}

impl NewInventoryItem {
    fn validated(self) -> DomainResult<Self> {
        let item_name = required_text("item name", &self.item_name)?;
        let supplier = required_text("supplier", &self.supplier)?;
        Ok(Self {
            item_name,
            supplier,
            ..self
        })
    }
}

fn required_text(field: &str, value: &str) -> DomainResult<String> {
    let text = greenscape_core::text::required(field, value)?;
    if text.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainError::validation(format!("{field} cannot be just numbers")));
    }
    Ok(text)
}

/// Entity: InventoryItem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    id: InventoryItemId,
    #[serde(rename = "itemName")]
    name: String,
    category: Category,
    quantity: u32,
    supplier: String,
    price: Price,
    maintenance_schedule: MaintenanceSchedule,
    #[serde(default)]
    reorder_level: u32,
    #[serde(default)]
    reorder_amount: u32,
}

impl InventoryItem {
    /// Build a new item from validated input. Reorder thresholds start unset (0).
    pub fn create(id: InventoryItemId, input: NewInventoryItem) -> DomainResult<Self> {
        let input = input.validated()?;
        Ok(Self {
            id,
            name: input.item_name,
            category: input.category,
            quantity: input.quantity,
            supplier: input.supplier,
            price: input.price,
            maintenance_schedule: input.maintenance_schedule,
            reorder_level: 0,
            reorder_amount: 0,
        })
    }

    /// Replace every descriptive field; reorder thresholds are kept.
    pub fn replace_details(&mut self, input: NewInventoryItem) -> DomainResult<()> {
        let input = input.validated()?;
        self.name = input.item_name;
        self.category = input.category;
        self.quantity = input.quantity;
        self.supplier = input.supplier;
        self.price = input.price;
        self.maintenance_schedule = input.maintenance_schedule;
        Ok(())
    }

    pub fn id_typed(&self) -> InventoryItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn maintenance_schedule(&self) -> MaintenanceSchedule {
        self.maintenance_schedule
    }

    pub fn reorder_level(&self) -> u32 {
        self.reorder_level
    }

    pub fn reorder_amount(&self) -> u32 {
        self.reorder_amount
    }

    pub(crate) fn set_reorder_level(&mut self, value: u32) {
        self.reorder_level = value;
    }

    pub(crate) fn set_reorder_amount(&mut self, value: u32) {
        self.reorder_amount = value;
    }

    /// Depletion ratio (quantity ÷ reorder level); `None` while no level is set.
    pub fn urgency(&self) -> Option<f64> {
        if self.reorder_level == 0 {
            return None;
        }
        Some(f64::from(self.quantity) / f64::from(self.reorder_level))
    }
}

impl Entity for InventoryItem {
    type Id = InventoryItemId;

    const COLLECTION: &'static str = "inventories";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
