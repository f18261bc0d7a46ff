//! Order payload types
//!
//! The kiosk front-end posts loosely shaped JSON: amounts may be missing,
//! quantities may be zero, modifiers arrive under one of three keys and as
//! either plain strings or records. Everything is normalized here so the
//! renderers only see well-formed values.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Order placed at the kiosk
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintOrder {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<OrderItem>,
    /// Table label; None for to-go orders
    #[serde(default, deserialize_with = "deserialize_table_number")]
    pub table_number: Option<String>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub subtotal: Decimal,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub tax: Decimal,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub tip_amount: Decimal,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub total_amount: Decimal,
    /// Display date as sent by the kiosk
    #[serde(default, deserialize_with = "deserialize_text")]
    pub date: String,
    #[serde(default, deserialize_with = "deserialize_order_type")]
    pub order_type: OrderType,
}

impl PrintOrder {
    pub fn is_to_go(&self) -> bool {
        self.table_number.is_none()
    }
}

/// Service style chosen at the kiosk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderType {
    DineIn,
    #[default]
    ToGo,
}

/// One line of the order
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawOrderItem")]
pub struct OrderItem {
    pub name: String,
    /// Short kitchen-facing name
    pub pos_name: Option<String>,
    /// Always >= 1
    pub quantity: u32,
    pub total_price: Decimal,
    pub modifiers: Vec<Modifier>,
}

impl OrderItem {
    /// Name printed on kitchen tickets
    pub fn kitchen_name(&self) -> &str {
        match self.pos_name.as_deref() {
            Some(pos) if !pos.is_empty() => pos,
            _ => &self.name,
        }
    }

    /// Lowercased "name pos_name", used for routing decisions
    pub fn search_text(&self) -> String {
        format!("{} {}", self.name, self.pos_name.as_deref().unwrap_or("")).to_lowercase()
    }
}

/// Customization applied to an item
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawModifier")]
pub struct Modifier {
    pub name: String,
    pub price: Decimal,
}

#[derive(Deserialize)]
struct RawOrderItem {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    pos_name: Option<String>,
    #[serde(default)]
    quantity: Value,
    #[serde(default, rename = "totalPrice")]
    total_price: Value,
    #[serde(default, rename = "selectedModifiers")]
    selected_modifiers: Option<Vec<Modifier>>,
    #[serde(default)]
    options: Option<Vec<Modifier>>,
    #[serde(default)]
    modifiers: Option<Vec<Modifier>>,
}

impl From<RawOrderItem> for OrderItem {
    fn from(raw: RawOrderItem) -> Self {
        let quantity = match lenient_number(&raw.quantity).and_then(|q| q.as_f64()) {
            Some(q) if q >= 1.0 => q.trunc().min(u32::MAX as f64) as u32,
            _ => 1,
        };

        // First key present wins, even when its list is empty
        let modifiers = raw
            .selected_modifiers
            .or(raw.options)
            .or(raw.modifiers)
            .unwrap_or_default();

        Self {
            name: raw.name.unwrap_or_default(),
            pos_name: raw.pos_name,
            quantity,
            total_price: lenient_decimal(&raw.total_price),
            modifiers,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawModifier {
    Text(String),
    Record {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        price: Value,
    },
}

impl From<RawModifier> for Modifier {
    fn from(raw: RawModifier) -> Self {
        match raw {
            RawModifier::Text(name) => Self {
                name,
                price: Decimal::ZERO,
            },
            RawModifier::Record { name, label, price } => Self {
                name: name
                    .filter(|n| !n.is_empty())
                    .or(label)
                    .unwrap_or_default(),
                price: lenient_decimal(&price),
            },
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Number or numeric string; anything else is None
fn lenient_number(value: &Value) -> Option<serde_json::Number> {
    match value {
        Value::Number(n) => Some(n.clone()),
        Value::String(s) => serde_json::Number::from_str(s.trim()).ok(),
        _ => None,
    }
}

/// Money value, zero when missing or unreadable
fn lenient_decimal(value: &Value) -> Decimal {
    lenient_number(value)
        .and_then(|n| {
            let repr = n.to_string();
            Decimal::from_str(&repr)
                .or_else(|_| Decimal::from_scientific(&repr))
                .ok()
        })
        .unwrap_or_default()
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_decimal(&Value::deserialize(deserializer)?))
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn deserialize_table_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let label = match Value::deserialize(deserializer)? {
        Value::String(s) => s.trim().to_string(),
        // Table 0 is what the kiosk sends for counter orders
        Value::Number(n) if n.as_f64() == Some(0.0) => return Ok(None),
        Value::Number(n) => n.to_string(),
        _ => return Ok(None),
    };

    if label.is_empty() || label.eq_ignore_ascii_case("to go") {
        Ok(None)
    } else {
        Ok(Some(label))
    }
}

fn deserialize_order_type<'de, D>(deserializer: D) -> Result<OrderType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if s == "dine_in" => OrderType::DineIn,
        _ => OrderType::ToGo,
    })
}
